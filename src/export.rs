//! CSV and JSON serialization of a computed session.
//!
//! Both writers take a `SessionFrame` (traces plus envelopes over one time
//! base) and lay the data out one column per signal. Waveform parameters
//! travel as metadata so an exported file is self-describing.

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::dsp::waveform::WaveKind;
use crate::session::SessionFrame;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: no enabled waveforms")]
    NoData,
    #[error("could not write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize export document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strip characters that are invalid in filenames on common filesystems
/// and make sure the name carries a data extension.
///
/// An empty name maps to `waveforms` plus the default extension. Existing
/// `.csv` and `.json` extensions are preserved so a user-typed name never
/// has its chosen format overridden.
pub fn sanitize_filename(name: &str, default_ext: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .collect();
    if cleaned.is_empty() {
        return format!("waveforms{default_ext}");
    }
    let lower = cleaned.to_ascii_lowercase();
    if lower.ends_with(".csv") || lower.ends_with(".json") {
        cleaned
    } else {
        format!("{cleaned}{default_ext}")
    }
}

fn shared_time(frame: &SessionFrame) -> Option<&[f64]> {
    if let Some(trace) = frame.traces.first() {
        return Some(&trace.series.time);
    }
    frame
        .envelopes
        .first()
        .map(|e| e.series.time.as_slice())
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Write the frame as CSV: `# ` metadata lines, a header row, then one
/// 6-decimal row per sample.
pub fn export_csv(
    path: impl AsRef<Path>,
    frame: &SessionFrame,
    sample_rate: u32,
    duration: f64,
) -> Result<(), ExportError> {
    let time = shared_time(frame).ok_or(ExportError::NoData)?;

    let mut lines: Vec<String> = Vec::with_capacity(time.len() + frame.traces.len() + 4);
    lines.push(format!("# Exported: {}", timestamp()));

    for trace in &frame.traces {
        let spec = &trace.spec;
        let mut parts = vec![
            format!("# {}: {}", spec.display_name(), spec.kind.label()),
            format!("{} Hz", spec.frequency),
            format!("{} amplitude", spec.amplitude),
            format!("{} offset", spec.offset),
        ];
        if spec.kind == WaveKind::Square {
            parts.push(format!("{}% duty cycle", spec.duty_cycle));
        }
        lines.push(parts.join(", "));
    }
    for envelope in &frame.envelopes {
        lines.push(format!(
            "# {}: Computed from {} waveforms",
            envelope.kind.column_name(),
            envelope.source_count
        ));
    }
    lines.push(format!("# Sample Rate: {sample_rate} S/s, Duration: {duration}s"));

    let mut header = vec!["Time (s)".to_string()];
    header.extend(frame.traces.iter().map(|t| t.spec.display_name()));
    header.extend(
        frame
            .envelopes
            .iter()
            .map(|e| e.kind.column_name().to_string()),
    );
    lines.push(header.join(","));

    for i in 0..time.len() {
        let mut row = Vec::with_capacity(1 + frame.traces.len() + frame.envelopes.len());
        row.push(format!("{:.6}", time[i]));
        for trace in &frame.traces {
            row.push(format!("{:.6}", trace.series.amplitude[i]));
        }
        for envelope in &frame.envelopes {
            row.push(format!("{:.6}", envelope.series.amplitude[i]));
        }
        lines.push(row.join(","));
    }

    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    exported: String,
    sample_rate: u32,
    duration: f64,
    time: &'a [f64],
    waveforms: Vec<WaveformRecord<'a>>,
    envelopes: Vec<EnvelopeRecord<'a>>,
}

#[derive(Serialize)]
struct WaveformRecord<'a> {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duty_cycle: f64,
    amplitude_data: &'a [f64],
}

#[derive(Serialize)]
struct EnvelopeRecord<'a> {
    name: &'static str,
    source_count: usize,
    amplitude_data: &'a [f64],
}

/// Write the frame as one JSON document with the shared time array and
/// per-signal records.
pub fn export_json(
    path: impl AsRef<Path>,
    frame: &SessionFrame,
    sample_rate: u32,
    duration: f64,
) -> Result<(), ExportError> {
    let time = shared_time(frame).ok_or(ExportError::NoData)?;

    let document = ExportDocument {
        exported: timestamp(),
        sample_rate,
        duration,
        time,
        waveforms: frame
            .traces
            .iter()
            .map(|trace| WaveformRecord {
                name: trace.spec.display_name(),
                kind: trace.spec.kind.name(),
                frequency: trace.spec.frequency,
                amplitude: trace.spec.amplitude,
                offset: trace.spec.offset,
                duty_cycle: trace.spec.duty_cycle,
                amplitude_data: &trace.series.amplitude,
            })
            .collect(),
        envelopes: frame
            .envelopes
            .iter()
            .map(|envelope| EnvelopeRecord {
                name: envelope.kind.column_name(),
                source_count: envelope.source_count,
                amplitude_data: &envelope.series.amplitude,
            })
            .collect(),
    };

    let text = serde_json::to_string_pretty(&document)?;
    fs::write(path, text)?;
    Ok(())
}
