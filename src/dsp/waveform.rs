use serde::{Deserialize, Serialize};

use crate::dsp::series::{time_base, SampledSeries};

/*
Waveform Synthesis
==================

This module generates the four classic periodic shapes as sampled series
over a shared time base. The generators are plain functions: parameters in,
fresh (time, amplitude) vectors out.

Vocabulary
----------

  amplitude     The peak-to-peak span of the shape. NOT zero-to-peak: a
                waveform with amplitude 4 and offset 5 swings between 3
                and 7. Historically both conventions existed in this
                product; the half-amplitude form below is the documented
                one and the tests pin it.

  offset        The vertical center line the shape oscillates around.

  duty cycle    For the square shape only: the percentage of each period
                spent at the high level. 50% is the symmetric square; 1%
                is a narrow positive pulse.

  cycle         One full period of the shape. At frequency f the period
                is 1/f seconds, so sample t sits at cycle fraction
                frac(f * t), a value in [0, 1).


The Common Formula
------------------

Every generator evaluates

    y(t) = offset + (amplitude / 2) * shape(frac(f * t))

where shape() maps a cycle fraction to [-1, +1]:

  SINE       sin(2 pi * frac)       smooth, single frequency
  SQUARE     +1 below the duty      two levels, instant transitions
             fraction, -1 above
  SAWTOOTH   linear climb -1 to +1, rich in harmonics, one
             instant reset           discontinuity per cycle
  TRIANGLE   climb for half the     the symmetric special case of
             cycle, descend for      the ramp below
             the other half


One Ramp, Two Shapes
--------------------

Sawtooth and triangle come from a single piecewise-linear ramp with a
`width` parameter: the fraction of the cycle spent rising.

    width = 1.0          width = 0.5

      /|  /|  /|           /\    /\
     / | / | / |          /  \  /  \
    /  |/  |/  |         /    \/    \

The rising section maps [0, width) onto [-1, +1); the falling section maps
[width, 1) back down to -1. Triangle is exactly the width = 0.5 ramp, and
the tests hold the two generators to that identity.


Degenerate Input
----------------

These functions never raise. A non-positive duration produces an empty
series, a sub-sample duration produces a single point at t = 0, and a zero
amplitude produces a flat line at the offset. Range validation (frequency,
amplitude, offset, duty bounds) is the session layer's job; values outside
the documented ranges run through the formulas as written.
*/

/// The supported wave shapes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaveKind {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl WaveKind {
    /// All kinds in display and cycle order.
    pub const ALL: [WaveKind; 4] = [
        WaveKind::Sine,
        WaveKind::Square,
        WaveKind::Sawtooth,
        WaveKind::Triangle,
    ];

    /// Parse a kind from its configuration name, case-insensitively.
    ///
    /// Unrecognized names select `Sine` rather than failing: a stale or
    /// hand-edited config degrades to the plainest shape instead of
    /// refusing to start.
    pub fn from_name(name: &str) -> WaveKind {
        match name.to_ascii_lowercase().as_str() {
            "sine" => WaveKind::Sine,
            "square" => WaveKind::Square,
            "sawtooth" => WaveKind::Sawtooth,
            "triangle" => WaveKind::Triangle,
            _ => WaveKind::Sine,
        }
    }

    /// Lowercase name used in config files and JSON exports.
    pub fn name(self) -> &'static str {
        match self {
            WaveKind::Sine => "sine",
            WaveKind::Square => "square",
            WaveKind::Sawtooth => "sawtooth",
            WaveKind::Triangle => "triangle",
        }
    }

    /// Capitalized name for display and export metadata.
    pub fn label(self) -> &'static str {
        match self {
            WaveKind::Sine => "Sine",
            WaveKind::Square => "Square",
            WaveKind::Sawtooth => "Sawtooth",
            WaveKind::Triangle => "Triangle",
        }
    }

    /// The following kind in cycle order, wrapping around.
    pub fn next(self) -> WaveKind {
        match self {
            WaveKind::Sine => WaveKind::Square,
            WaveKind::Square => WaveKind::Sawtooth,
            WaveKind::Sawtooth => WaveKind::Triangle,
            WaveKind::Triangle => WaveKind::Sine,
        }
    }

    /// The preceding kind in cycle order, wrapping around.
    pub fn prev(self) -> WaveKind {
        match self {
            WaveKind::Sine => WaveKind::Triangle,
            WaveKind::Square => WaveKind::Sine,
            WaveKind::Sawtooth => WaveKind::Square,
            WaveKind::Triangle => WaveKind::Sawtooth,
        }
    }
}

/// Position inside the current cycle as a fraction in [0, 1).
#[inline]
fn cycle_fraction(frequency: f64, t: f64) -> f64 {
    let cycles = frequency * t;
    cycles - cycles.floor()
}

/// Two-level pulse: +1 for the first `duty` fraction of the cycle, -1 for
/// the rest.
#[inline]
fn pulse(fraction: f64, duty: f64) -> f64 {
    if fraction < duty {
        1.0
    } else {
        -1.0
    }
}

/// Piecewise-linear ramp spending `width` of the cycle rising from -1 to +1
/// and the remainder falling back down.
///
/// width = 1 is the classic sawtooth (rise, instant reset) and width = 0.5
/// is the symmetric triangle.
#[inline]
fn ramp(fraction: f64, width: f64) -> f64 {
    if width >= 1.0 {
        2.0 * fraction - 1.0
    } else if width <= 0.0 {
        1.0 - 2.0 * fraction
    } else if fraction < width {
        2.0 * fraction / width - 1.0
    } else {
        (width + 1.0 - 2.0 * fraction) / (1.0 - width)
    }
}

/// Generate a sine series: `offset + (amplitude/2) * sin(2 pi f t)`.
pub fn sine_series(
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duration: f64,
    sample_rate: u32,
) -> SampledSeries {
    let time = time_base(duration, sample_rate);
    let half = amplitude / 2.0;
    let samples = time
        .iter()
        .map(|&t| offset + half * (std::f64::consts::TAU * frequency * t).sin())
        .collect();
    SampledSeries {
        time,
        amplitude: samples,
    }
}

/// Generate a square series holding the high level for `duty_cycle` percent
/// of each period.
pub fn square_series(
    frequency: f64,
    amplitude: f64,
    duty_cycle: f64,
    offset: f64,
    duration: f64,
    sample_rate: u32,
) -> SampledSeries {
    let time = time_base(duration, sample_rate);
    let half = amplitude / 2.0;
    let duty = duty_cycle / 100.0;
    let samples = time
        .iter()
        .map(|&t| offset + half * pulse(cycle_fraction(frequency, t), duty))
        .collect();
    SampledSeries {
        time,
        amplitude: samples,
    }
}

fn ramp_series(
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duration: f64,
    sample_rate: u32,
    width: f64,
) -> SampledSeries {
    let time = time_base(duration, sample_rate);
    let half = amplitude / 2.0;
    let samples = time
        .iter()
        .map(|&t| offset + half * ramp(cycle_fraction(frequency, t), width))
        .collect();
    SampledSeries {
        time,
        amplitude: samples,
    }
}

/// Generate a sawtooth series: linear climb from -1 to +1 over each period
/// with a discontinuous reset.
pub fn sawtooth_series(
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duration: f64,
    sample_rate: u32,
) -> SampledSeries {
    ramp_series(frequency, amplitude, offset, duration, sample_rate, 1.0)
}

/// Generate a triangle series: the symmetric ramp, rising for the first
/// half of each period and falling for the second.
pub fn triangle_series(
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duration: f64,
    sample_rate: u32,
) -> SampledSeries {
    ramp_series(frequency, amplitude, offset, duration, sample_rate, 0.5)
}

/// Generate a series for `kind` through a single call signature.
///
/// `duty_cycle` is consulted only by the square shape; the other kinds
/// accept and ignore it so callers can hold one parameter set per waveform.
pub fn synthesize(
    kind: WaveKind,
    frequency: f64,
    amplitude: f64,
    offset: f64,
    duty_cycle: f64,
    duration: f64,
    sample_rate: u32,
) -> SampledSeries {
    match kind {
        WaveKind::Sine => sine_series(frequency, amplitude, offset, duration, sample_rate),
        WaveKind::Square => {
            square_series(frequency, amplitude, duty_cycle, offset, duration, sample_rate)
        }
        WaveKind::Sawtooth => sawtooth_series(frequency, amplitude, offset, duration, sample_rate),
        WaveKind::Triangle => triangle_series(frequency, amplitude, offset, duration, sample_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_starts_at_offset_and_peaks_at_quarter_period() {
        let series = sine_series(1.0, 2.0, 0.0, 1.0, 1000);
        assert_eq!(series.len(), 1000);
        assert_eq!(series.time[0], 0.0);
        assert!(series.amplitude[0].abs() < 1e-9);

        // Quarter period of a 1 Hz sine peaks at amplitude/2.
        let quarter = 250;
        assert!((series.time[quarter] - 0.25).abs() < 1e-3);
        assert!((series.amplitude[quarter] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn sine_extremes_are_offset_plus_minus_half_amplitude() {
        let series = sine_series(2.0, 4.0, 5.0, 2.0, 1000);
        let max = series.amplitude.iter().cloned().fold(f64::MIN, f64::max);
        let min = series.amplitude.iter().cloned().fold(f64::MAX, f64::min);
        assert!((max - 7.0).abs() < 1e-3);
        assert!((min - 3.0).abs() < 1e-3);
    }

    #[test]
    fn square_takes_exactly_two_levels() {
        let series = square_series(1.0, 4.0, 50.0, 5.0, 1.0, 1000);
        for &y in &series.amplitude {
            assert!((y - 7.0).abs() < 1e-9 || (y - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn square_at_half_duty_splits_samples_evenly() {
        // One full period of a 1 Hz square at 50% duty: half the samples
        // high, half low. The inclusive endpoint at t = 1.0 sits at the
        // start of the next period and counts as one extra high sample.
        let series = square_series(1.0, 2.0, 50.0, 0.0, 1.0, 1000);
        let high = series.amplitude.iter().filter(|&&y| y > 0.0).count();
        let low = series.amplitude.len() - high;
        assert!((high as i64 - low as i64).abs() <= 2);
    }

    #[test]
    fn square_duty_extremes() {
        let narrow = square_series(1.0, 4.0, 1.0, 5.0, 1.0, 10_000);
        let low = narrow.amplitude.iter().filter(|&&y| y < 5.0).count();
        let high = narrow.amplitude.len() - low;
        assert!(low > high);

        let full = square_series(1.0, 4.0, 100.0, 5.0, 1.0, 10_000);
        assert!(full.amplitude.iter().all(|&y| (y - 7.0).abs() < 1e-9));
    }

    #[test]
    fn sawtooth_resets_once_per_period() {
        let series = sawtooth_series(2.0, 2.0, 0.0, 1.0, 1000);
        let drops = series
            .amplitude
            .windows(2)
            .filter(|pair| pair[1] < pair[0] - 1.0)
            .count();
        assert_eq!(drops, 2);
    }

    #[test]
    fn triangle_is_the_half_width_ramp() {
        let triangle = triangle_series(3.0, 4.0, 5.0, 2.0, 1000);
        let ramp = ramp_series(3.0, 4.0, 5.0, 2.0, 1000, 0.5);
        assert_eq!(triangle, ramp);
    }

    #[test]
    fn zero_amplitude_is_flat_for_every_kind() {
        for kind in WaveKind::ALL {
            let series = synthesize(kind, 1.0, 0.0, 3.0, 50.0, 1.0, 1000);
            assert!(series.amplitude.iter().all(|&y| (y - 3.0).abs() < 1e-9));
        }
    }

    #[test]
    fn every_kind_stays_within_half_amplitude_of_offset() {
        for kind in WaveKind::ALL {
            let series = synthesize(kind, 1.0, 4.0, 5.0, 50.0, 1.0, 1000);
            for &y in &series.amplitude {
                assert!((3.0 - 1e-9..=7.0 + 1e-9).contains(&y), "{kind:?} produced {y}");
            }
        }
    }

    #[test]
    fn extreme_parameters_stay_finite() {
        for &freq in &[0.1, 100.0] {
            let series = sine_series(freq, 10.0, 10.0, 1.0, 1000);
            assert!(series.amplitude.iter().all(|y| y.is_finite()));
        }
    }

    #[test]
    fn degenerate_duration_degrades_without_error() {
        for kind in WaveKind::ALL {
            assert!(synthesize(kind, 1.0, 2.0, 0.0, 50.0, 0.0, 1000).is_empty());
            assert!(synthesize(kind, 1.0, 2.0, 0.0, 50.0, -1.0, 1000).is_empty());
        }
    }

    #[test]
    fn dispatch_matches_the_per_kind_generators() {
        let args = (2.0, 3.0, 1.0, 75.0, 1.0, 1000);
        let (f, a, o, duty, dur, rate) = args;
        assert_eq!(
            synthesize(WaveKind::Sine, f, a, o, duty, dur, rate),
            sine_series(f, a, o, dur, rate)
        );
        assert_eq!(
            synthesize(WaveKind::Square, f, a, o, duty, dur, rate),
            square_series(f, a, duty, o, dur, rate)
        );
        assert_eq!(
            synthesize(WaveKind::Sawtooth, f, a, o, duty, dur, rate),
            sawtooth_series(f, a, o, dur, rate)
        );
        assert_eq!(
            synthesize(WaveKind::Triangle, f, a, o, duty, dur, rate),
            triangle_series(f, a, o, dur, rate)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_sine() {
        assert_eq!(WaveKind::from_name("sine"), WaveKind::Sine);
        assert_eq!(WaveKind::from_name("SQUARE"), WaveKind::Square);
        assert_eq!(WaveKind::from_name("Sawtooth"), WaveKind::Sawtooth);
        assert_eq!(WaveKind::from_name("triangle"), WaveKind::Triangle);
        assert_eq!(WaveKind::from_name("unknown_type"), WaveKind::Sine);
        assert_eq!(WaveKind::from_name(""), WaveKind::Sine);
    }

    #[test]
    fn kind_cycling_wraps_both_ways() {
        for kind in WaveKind::ALL {
            assert_eq!(kind.next().prev(), kind);
            assert_eq!(kind.prev().next(), kind);
        }
    }
}
