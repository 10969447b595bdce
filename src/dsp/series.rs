/// A uniformly sampled signal: time values in seconds paired 1:1 with
/// amplitude values.
///
/// Every synthesis call allocates a fresh series; nothing is cached or
/// mutated in place. All series built from the same (duration, sample rate)
/// pair carry an identical time sequence, which is what lets the envelope
/// reductions zip amplitude slices positionally without re-checking
/// alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledSeries {
    /// Sample instants in seconds, evenly spaced from 0 to the duration
    /// inclusive.
    pub time: Vec<f64>,
    /// Amplitude at each instant.
    pub amplitude: Vec<f64>,
}

impl SampledSeries {
    /// A series with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Number of samples for a given duration at a given rate:
/// `floor(rate x duration)`, clamped at zero so a non-positive duration
/// yields an empty time base instead of an error.
#[inline]
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    let n = (sample_rate as f64 * duration).floor();
    if n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Evenly spaced time values from 0 to `duration` inclusive.
///
/// Inclusive-both-ends semantics: with n points the step is
/// `duration / (n - 1)`, a single point sits at 0, and zero points is an
/// empty vector.
pub fn time_base(duration: f64, sample_rate: u32) -> Vec<f64> {
    let n = sample_count(duration, sample_rate);
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = duration / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_floor_of_rate_times_duration() {
        assert_eq!(sample_count(1.0, 1000), 1000);
        assert_eq!(sample_count(2.5, 1000), 2500);
        assert_eq!(sample_count(0.0015, 1000), 1);
    }

    #[test]
    fn degenerate_durations_yield_empty() {
        assert_eq!(sample_count(0.0, 1000), 0);
        assert_eq!(sample_count(-1.0, 1000), 0);
        assert!(time_base(0.0, 1000).is_empty());
        assert!(time_base(-1.0, 1000).is_empty());
    }

    #[test]
    fn single_point_sits_at_zero() {
        assert_eq!(time_base(0.0015, 1000), vec![0.0]);
    }

    #[test]
    fn spans_zero_to_duration_inclusive() {
        let t = time_base(3.0, 1000);
        assert_eq!(t.len(), 3000);
        assert_eq!(t[0], 0.0);
        assert!((t[t.len() - 1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn monotonically_increasing() {
        let t = time_base(1.0, 1000);
        for pair in t.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
