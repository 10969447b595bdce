//! TUI widgets for wavescope.
//!
//! Layout: a status bar on top, the sidebar and chart side by side, and a
//! help bar at the bottom.

mod chart;
mod sidebar;
mod status;
mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub use theme::{palette, Palette};

pub fn render(frame: &mut Frame, app: &App) {
    let palette = palette(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status bar
            Constraint::Min(10),   // Sidebar + chart
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    status::render_status(frame, chunks[0], app, &palette);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(chunks[1]);

    sidebar::render_sidebar(frame, columns[0], app, &palette);
    chart::render_chart(frame, columns[1], app, &palette);

    let help = Paragraph::new(
        " [Q] Quit  [A] Add  [D] Remove  [Tab] Select  [Space] Toggle  \
         [↑↓] Param  [←→] Adjust  [M/N/R] Envelopes  [G] Grid  [U] Autoscale  \
         [T] Theme  [[/]] Duration  [C] CSV  [J] JSON  [W] Save config",
    )
    .style(ratatui::style::Style::default().fg(palette.dimmed));
    frame.render_widget(help, chunks[2]);
}
