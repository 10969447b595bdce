//! Waveform list and the active waveform's parameter rows.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use wavescope::dsp::waveform::WaveKind;
use wavescope::session::WaveformSpec;

use crate::app::{App, ParamField};

use super::Palette;

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Waveforms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let mut lines: Vec<Line> = Vec::new();

    for waveform in &app.session.waveforms {
        lines.push(list_row(
            waveform,
            waveform.id == app.session.active_index,
            palette,
        ));
    }
    lines.push(Line::raw(""));

    if let Some(active) = app.session.active() {
        for field in ParamField::ALL {
            lines.push(param_row(active, field, app.selected == field, palette));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn list_row<'a>(waveform: &WaveformSpec, active: bool, palette: &Palette) -> Line<'a> {
    let (r, g, b) = waveform.color;
    let swatch_style = if waveform.enabled {
        Style::default().fg(Color::Rgb(r, g, b))
    } else {
        Style::default().fg(palette.disabled)
    };
    let name_style = if active {
        Style::default()
            .fg(palette.selected)
            .add_modifier(Modifier::BOLD)
    } else if waveform.enabled {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.disabled)
    };

    Line::from(vec![
        Span::raw(if active { "> " } else { "  " }),
        Span::styled("\u{25ae} ", swatch_style),
        Span::styled(
            format!(
                "{:<12} {:<8} {:>5.1} Hz",
                waveform.display_name(),
                waveform.kind.label(),
                waveform.frequency
            ),
            name_style,
        ),
        Span::styled(
            if waveform.enabled { "" } else { "  off" },
            Style::default().fg(palette.dimmed),
        ),
    ])
}

fn param_row<'a>(
    active: &WaveformSpec,
    field: ParamField,
    selected: bool,
    palette: &Palette,
) -> Line<'a> {
    let value = match field {
        ParamField::Kind => active.kind.label().to_string(),
        ParamField::Frequency => format!("{:.1} Hz", active.frequency),
        ParamField::Amplitude => format!("{:.1}", active.amplitude),
        ParamField::Offset => format!("{:.1}", active.offset),
        ParamField::DutyCycle => format!("{:.0} %", active.duty_cycle),
    };

    // Duty cycle only drives the square shape; dim it elsewhere.
    let value_style = if field == ParamField::DutyCycle && active.kind != WaveKind::Square {
        Style::default().fg(palette.dimmed)
    } else if selected {
        Style::default()
            .fg(palette.selected)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    Line::from(vec![
        Span::styled(
            if selected { "> " } else { "  " },
            Style::default().fg(palette.selected),
        ),
        Span::styled(
            format!("{:<11}", field.label()),
            Style::default().fg(palette.dimmed),
        ),
        Span::styled(value, value_style),
    ])
}
