//! Benchmarks for the max/min/RMS reductions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavescope::dsp::envelope::{max_envelope, min_envelope, rms_envelope};
use wavescope::dsp::waveform::sine_series;
use wavescope::dsp::SampledSeries;
use wavescope::session::SAMPLE_RATE;

fn waveform_set(count: usize, duration: f64) -> Vec<SampledSeries> {
    (0..count)
        .map(|i| sine_series(1.0 + i as f64, 2.0, 5.0, duration, SAMPLE_RATE))
        .collect()
}

pub fn bench_envelopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/envelopes");

    // Worst case duration, varying set size like a real session.
    for count in [2usize, 3, 5] {
        let waveforms = waveform_set(count, 120.0);

        group.bench_with_input(BenchmarkId::new("max", count), &count, |b, _| {
            b.iter(|| max_envelope(black_box(&waveforms)))
        });
        group.bench_with_input(BenchmarkId::new("min", count), &count, |b, _| {
            b.iter(|| min_envelope(black_box(&waveforms)))
        });
        group.bench_with_input(BenchmarkId::new("rms", count), &count, |b, _| {
            b.iter(|| rms_envelope(black_box(&waveforms)))
        });
    }

    group.finish();
}
