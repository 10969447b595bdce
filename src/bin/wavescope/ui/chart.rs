//! Overlay chart: enabled waveform traces plus envelope curves.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use wavescope::dsp::SampledSeries;

use crate::app::App;

use super::Palette;

pub fn render_chart(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Chart ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    // Chart datasets borrow their points, so materialize every point list
    // before any Dataset is built.
    let trace_points: Vec<Vec<(f64, f64)>> = app
        .frame
        .traces
        .iter()
        .map(|t| points(&t.series))
        .collect();
    let envelope_points: Vec<Vec<(f64, f64)>> = app
        .frame
        .envelopes
        .iter()
        .map(|e| points(&e.series))
        .collect();

    let mut datasets: Vec<Dataset> = Vec::new();
    for (trace, data) in app.frame.traces.iter().zip(trace_points.iter()) {
        let (r, g, b) = trace.spec.color;
        datasets.push(
            Dataset::default()
                .name(trace.spec.display_name())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Rgb(r, g, b)))
                .data(data),
        );
    }
    for (envelope, data) in app.frame.envelopes.iter().zip(envelope_points.iter()) {
        let color = match envelope.kind {
            wavescope::dsp::EnvelopeKind::Max => palette.max_env,
            wavescope::dsp::EnvelopeKind::Min => palette.min_env,
            wavescope::dsp::EnvelopeKind::Rms => palette.rms_env,
        };
        datasets.push(
            Dataset::default()
                .name(envelope.kind.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data),
        );
    }

    let duration = app.session.duration();
    let (y_min, y_max) = y_bounds(app);

    let mut x_axis = Axis::default()
        .bounds([0.0, duration])
        .style(Style::default().fg(palette.axis));
    let mut y_axis = Axis::default()
        .bounds([y_min, y_max])
        .style(Style::default().fg(palette.axis));

    if app.session.show_grid {
        x_axis = x_axis.title("Time (s)").labels(vec![
            "0".to_string(),
            format!("{:.1}", duration / 2.0),
            format!("{:.1}", duration),
        ]);
        y_axis = y_axis
            .title(app.config.display.y_axis_title.clone())
            .labels(vec![
                format!("{y_min:.1}"),
                format!("{:.1}", (y_min + y_max) / 2.0),
                format!("{y_max:.1}"),
            ]);
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

fn points(series: &SampledSeries) -> Vec<(f64, f64)> {
    series
        .time
        .iter()
        .zip(series.amplitude.iter())
        .map(|(&t, &y)| (t, y))
        .collect()
}

/// Y bounds from the data with a little headroom, or the configured fixed
/// bounds when auto-scale is off.
fn y_bounds(app: &App) -> (f64, f64) {
    if !app.session.auto_scale {
        return (app.config.display.y_min, app.config.display.y_max);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for trace in &app.frame.traces {
        for &y in &trace.series.amplitude {
            min = min.min(y);
            max = max.max(y);
        }
    }
    for envelope in &app.frame.envelopes {
        for &y in &envelope.series.amplitude {
            min = min.min(y);
            max = max.max(y);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (app.config.display.y_min, app.config.display.y_max);
    }
    let margin = ((max - min) * 0.05).max(0.5);
    (min - margin, max + margin)
}
