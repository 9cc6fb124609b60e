pub mod silence;

pub use silence::{generate_silence, SAMPLE_RATE, SILENCE_HEADER};

use rand::Rng;

/// Shortest silence gap between lines, in seconds.
pub const MIN_GAP_SECS: f64 = 2.0;
/// Upper bound (exclusive) of the silence gap between lines, in seconds.
pub const MAX_GAP_SECS: f64 = 5.0;

/// Source of silence gap durations.
///
/// Abstracted so tests can supply deterministic durations while production
/// draws from a uniform random range.
pub trait GapSampler: Send + Sync {
    /// Duration in seconds of the next silence gap.
    fn sample_secs(&self) -> f64;
}

/// Draws each gap independently and uniformly from `[min_secs, max_secs)`.
pub struct UniformGapSampler {
    min_secs: f64,
    max_secs: f64,
}

impl UniformGapSampler {
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }
}

impl Default for UniformGapSampler {
    fn default() -> Self {
        Self::new(MIN_GAP_SECS, MAX_GAP_SECS)
    }
}

impl GapSampler for UniformGapSampler {
    fn sample_secs(&self) -> f64 {
        rand::thread_rng().gen_range(self.min_secs..self.max_secs)
    }
}
