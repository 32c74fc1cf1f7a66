//! Weighted sequence generation and entropy-gated rejection sampling.

use crate::config::GenerationConfig;
use crate::entropy::shannon_entropy;
use crate::error::{MotifError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Cumulative probability thresholds for the symbols (A, C, G, T).
///
/// Component `i` holds the sum of the probabilities of the first `i + 1`
/// symbols, so `[0.25, 0.5, 0.75, 1.0]` is the uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityVector([f64; 4]);

impl ProbabilityVector {
    /// Validate and wrap a set of cumulative thresholds.
    ///
    /// Components must be finite, non-negative and non-decreasing. The last
    /// threshold is not required to reach 1.0; see [`sample`](Self::sample).
    pub fn new(thresholds: [f64; 4]) -> Result<Self> {
        for (i, &t) in thresholds.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(MotifError::config(format!(
                    "probability threshold {i} must be finite and non-negative, got {t}"
                )));
            }
        }
        if thresholds.windows(2).any(|w| w[1] < w[0]) {
            return Err(MotifError::config(format!(
                "cumulative probability thresholds must be non-decreasing, got {thresholds:?}"
            )));
        }
        Ok(Self(thresholds))
    }

    /// The uniform distribution over the four symbols.
    pub fn uniform() -> Self {
        Self([0.25, 0.5, 0.75, 1.0])
    }

    /// Map one uniform draw in [0, 1) to a symbol code.
    ///
    /// The first threshold exceeding the draw wins, in order A, C, G. The
    /// final symbol T is a catch-all: a draw above every threshold still
    /// resolves, so the sampler stays total when the supplied probabilities
    /// do not sum to exactly 1.
    pub fn sample(&self, r: f64) -> u8 {
        if r < self.0[0] {
            0
        } else if r < self.0[1] {
            1
        } else if r < self.0[2] {
            2
        } else {
            3
        }
    }
}

/// Produces random sequences under a fixed length range and distribution.
///
/// Length range validation (`min_size < max_size`) happens in
/// [`SessionConfig::validate`](crate::config::SessionConfig::validate)
/// before a generator is ever constructed.
pub struct SequenceGenerator {
    probabilities: ProbabilityVector,
    min_size: usize,
    max_size: usize,
    rng: StdRng,
}

impl SequenceGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SequenceGenerator {
            probabilities: config.probabilities,
            min_size: config.min_size,
            max_size: config.max_size,
            rng,
        }
    }

    /// Produce one sequence with a length drawn uniformly from
    /// `[min_size, max_size)`. The upper bound is exclusive; `max_size`
    /// itself is never produced.
    pub fn generate(&mut self) -> Vec<u8> {
        let size = self.rng.gen_range(self.min_size..self.max_size);
        let mut sequence = Vec::with_capacity(size);
        for _ in 0..size {
            let r: f64 = self.rng.gen();
            sequence.push(self.probabilities.sample(r));
        }
        sequence
    }

    /// Generate candidates until one clears the entropy threshold.
    ///
    /// Rejection and retry is the designed acceptance mechanism, not error
    /// recovery. The attempt cap turns an unsatisfiable threshold (anything
    /// above log2(4) bits) into an explicit failure instead of a
    /// non-terminating loop.
    pub fn generate_accepted(&mut self, threshold: f64, max_attempts: usize) -> Result<Vec<u8>> {
        for attempt in 1..=max_attempts {
            let candidate = self.generate();
            let entropy = shannon_entropy(&candidate);
            if entropy >= threshold {
                trace!(attempt, entropy, len = candidate.len(), "candidate accepted");
                return Ok(candidate);
            }
            debug!(attempt, entropy, threshold, "candidate rejected, regenerating");
        }
        Err(MotifError::ThresholdUnreachable {
            threshold,
            attempts: max_attempts,
        })
    }
}
