//! Status bar: session summary and last action feedback.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::Palette;

pub fn render_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" wavescope ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let session = &app.session;
    let envelope_flags = format!(
        "Env: {}{}{}",
        if session.show_max { "Max " } else { "" },
        if session.show_min { "Min " } else { "" },
        if session.show_rms { "RMS " } else { "" },
    );

    let mut spans = vec![
        Span::styled(
            format!(" {:.1}s @ {} S/s  ", session.duration(), session.sample_rate),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            format!(
                "{}/{} waveforms enabled  ",
                session.enabled_count(),
                session.waveforms.len()
            ),
            Style::default().fg(palette.text),
        ),
        Span::styled(
            if session.can_show_envelopes() {
                envelope_flags
            } else {
                "Env: needs 2+ enabled".to_string()
            },
            Style::default().fg(palette.dimmed),
        ),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::raw("  "));
        let color = if status.contains("failed") {
            palette.error
        } else {
            palette.success
        };
        spans.push(Span::styled(status.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
