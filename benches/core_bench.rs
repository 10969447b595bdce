//! Benchmarks for waveform synthesis and envelope aggregation.
//!
//! Run with: cargo bench
//!
//! The interactive budget is 100ms end to end per parameter change, with
//! envelope aggregation expected to stay under 10ms even at the largest
//! session (5 waveforms x 120s x 1000 S/s = 600k samples in play).
//!
//! Benchmark groups:
//!   - core/synthesis   The four shape generators across durations
//!   - core/envelopes   Max/min/RMS reductions across set sizes

use criterion::{criterion_group, criterion_main};

mod core;

/// Durations (seconds) spanning the supported session range.
pub const DURATIONS: &[f64] = &[1.0, 10.0, 120.0];

criterion_group!(benches, core::bench_synthesis, core::bench_envelopes);
criterion_main!(benches);
