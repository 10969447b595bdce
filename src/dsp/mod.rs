//! Pure synthesis and aggregation primitives.
//!
//! Everything in here is a total function from parameters to freshly
//! allocated sample data: no I/O, no shared state, no caching. The UI and
//! export layers recompute on every parameter change and rely on that purity
//! to stay trivially thread-safe.

/// Per-sample max/min/RMS reductions over a waveform set.
pub mod envelope;
/// The (time, amplitude) series type and its shared time base.
pub mod series;
/// Wave kinds and the four shape generators.
pub mod waveform;

pub use envelope::{EnvelopeKind, EnvelopeResult};
pub use series::SampledSeries;
pub use waveform::WaveKind;
