//! Benchmarks for the four shape generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavescope::dsp::waveform::{synthesize, WaveKind};
use wavescope::session::SAMPLE_RATE;

use crate::DURATIONS;

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/synthesis");

    for &duration in DURATIONS {
        for kind in WaveKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), duration),
                &duration,
                |b, &duration| {
                    b.iter(|| {
                        synthesize(
                            black_box(kind),
                            black_box(5.0),
                            5.0,
                            5.0,
                            50.0,
                            black_box(duration),
                            SAMPLE_RATE,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}
