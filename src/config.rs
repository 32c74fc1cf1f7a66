//! Session configuration and validation.
//!
//! A [`SessionConfig`] is assembled by the CLI layer and validated before
//! the core is invoked at all: configuration errors are rejected up front,
//! never clamped or deferred into the generation loop.

use crate::entropy::MAX_ENTROPY_BITS;
use crate::error::{MotifError, Result};
use crate::generate::ProbabilityVector;
use tracing::warn;

/// Default cap on consecutive entropy rejections before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Where the session's sequences come from.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Generate new sequences, persist them and count them.
    Generate(GenerationConfig),
    /// Read an existing corpus and count it.
    ReadExisting,
}

/// Parameters for sequence generation.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of sequences to generate
    pub loops: usize,
    /// Minimum sequence length (inclusive)
    pub min_size: usize,
    /// Maximum sequence length (exclusive)
    pub max_size: usize,
    /// Cumulative symbol probability thresholds
    pub probabilities: ProbabilityVector,
    /// Minimum Shannon entropy (bits) an accepted sequence must reach
    pub entropy_threshold: f64,
    /// Attempt budget for the entropy rejection loop
    pub max_attempts: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            loops: 100,
            min_size: 20,
            max_size: 50,
            probabilities: ProbabilityVector::uniform(),
            entropy_threshold: 0.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Full configuration of one analysis session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub mode: Mode,
    /// Motif window length
    pub motif_size: usize,
    /// Count sequences in parallel (read mode only)
    pub parallel: bool,
}

impl SessionConfig {
    /// Check every constraint before any generation or counting begins.
    pub fn validate(&self) -> Result<()> {
        if self.motif_size == 0 {
            return Err(MotifError::config("motif size must be positive"));
        }
        if let Mode::Generate(generation) = &self.mode {
            generation.validate()?;
        }
        Ok(())
    }
}

impl GenerationConfig {
    fn validate(&self) -> Result<()> {
        if self.loops == 0 {
            return Err(MotifError::config("number of sequences to generate must be positive"));
        }
        if self.min_size >= self.max_size {
            return Err(MotifError::config(format!(
                "minimum size {} must be strictly below maximum size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(MotifError::config("entropy attempt budget must be positive"));
        }
        if self.entropy_threshold > MAX_ENTROPY_BITS {
            // Not rejected: the bounded rejection loop surfaces the failure.
            warn!(
                threshold = self.entropy_threshold,
                max = MAX_ENTROPY_BITS,
                "entropy threshold exceeds the 4-symbol maximum; every candidate will be rejected"
            );
        }
        Ok(())
    }
}
