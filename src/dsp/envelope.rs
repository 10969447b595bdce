use crate::dsp::series::SampledSeries;

/*
Envelope Aggregation
====================

Given several waveforms sampled over one shared time base, these reductions
collapse the set into a single derived curve per sample index:

  MAX    the upper boundary of the overlaid set
  MIN    the lower boundary
  RMS    sqrt(mean(y^2)) across the set at each instant. This is a
         combined-energy measure of all sources, not a max/min variant:
         two waveforms crossing zero in opposite directions have a max of
         +a and a min of -a but an RMS of a.

The peak-to-peak band the UI fills is simply (max, min) drawn together;
there is no separate reduction for it.

Preconditions
-------------

Inputs must share one time base. That holds by construction when every
series came from the same (duration, sample rate) pair, so only amplitude
lengths are guarded here (debug assertions, to catch integration bugs in
testing). The first series' time sequence becomes the result's time
sequence.

An empty input set returns an empty series rather than an error: no enabled
waveforms simply means no envelope to draw. A single-series input is not
special-cased; max == min == the series and RMS == |series| fall out of the
formulas. The reductions are commutative across the set, so input order
never affects the result.
*/

/// The derived curve a reduction produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Max,
    Min,
    Rms,
}

impl EnvelopeKind {
    pub const ALL: [EnvelopeKind; 3] = [EnvelopeKind::Max, EnvelopeKind::Min, EnvelopeKind::Rms];

    /// Column/variable name used by the export writers.
    pub fn column_name(self) -> &'static str {
        match self {
            EnvelopeKind::Max => "Max_Envelope",
            EnvelopeKind::Min => "Min_Envelope",
            EnvelopeKind::Rms => "RMS_Envelope",
        }
    }

    /// Short name for chart legends.
    pub fn label(self) -> &'static str {
        match self {
            EnvelopeKind::Max => "Max",
            EnvelopeKind::Min => "Min",
            EnvelopeKind::Rms => "RMS",
        }
    }
}

/// An envelope series tagged with its kind and provenance.
#[derive(Debug, Clone)]
pub struct EnvelopeResult {
    pub kind: EnvelopeKind,
    /// How many waveforms the reduction ran over.
    pub source_count: usize,
    pub series: SampledSeries,
}

/// Per-sample maximum across the set.
pub fn max_envelope(waveforms: &[SampledSeries]) -> SampledSeries {
    if waveforms.is_empty() {
        return SampledSeries::empty();
    }
    let first = &waveforms[0];
    let mut amplitude = first.amplitude.clone();
    for series in &waveforms[1..] {
        debug_assert_eq!(
            series.amplitude.len(),
            amplitude.len(),
            "envelope inputs must share one time base"
        );
        for (acc, &sample) in amplitude.iter_mut().zip(series.amplitude.iter()) {
            *acc = acc.max(sample);
        }
    }
    SampledSeries {
        time: first.time.clone(),
        amplitude,
    }
}

/// Per-sample minimum across the set.
pub fn min_envelope(waveforms: &[SampledSeries]) -> SampledSeries {
    if waveforms.is_empty() {
        return SampledSeries::empty();
    }
    let first = &waveforms[0];
    let mut amplitude = first.amplitude.clone();
    for series in &waveforms[1..] {
        debug_assert_eq!(
            series.amplitude.len(),
            amplitude.len(),
            "envelope inputs must share one time base"
        );
        for (acc, &sample) in amplitude.iter_mut().zip(series.amplitude.iter()) {
            *acc = acc.min(sample);
        }
    }
    SampledSeries {
        time: first.time.clone(),
        amplitude,
    }
}

/// Per-sample root of the mean of squared amplitudes across the set.
pub fn rms_envelope(waveforms: &[SampledSeries]) -> SampledSeries {
    if waveforms.is_empty() {
        return SampledSeries::empty();
    }
    let first = &waveforms[0];
    let mut sum_squares = vec![0.0f64; first.amplitude.len()];
    for series in waveforms {
        debug_assert_eq!(
            series.amplitude.len(),
            sum_squares.len(),
            "envelope inputs must share one time base"
        );
        for (acc, &sample) in sum_squares.iter_mut().zip(series.amplitude.iter()) {
            *acc += sample * sample;
        }
    }
    let count = waveforms.len() as f64;
    let amplitude = sum_squares.into_iter().map(|s| (s / count).sqrt()).collect();
    SampledSeries {
        time: first.time.clone(),
        amplitude,
    }
}

/// Run the reduction for `kind` and tag the result with its provenance.
pub fn envelope(kind: EnvelopeKind, waveforms: &[SampledSeries]) -> EnvelopeResult {
    let series = match kind {
        EnvelopeKind::Max => max_envelope(waveforms),
        EnvelopeKind::Min => min_envelope(waveforms),
        EnvelopeKind::Rms => rms_envelope(waveforms),
    };
    EnvelopeResult {
        kind,
        source_count: waveforms.len(),
        series,
    }
}
