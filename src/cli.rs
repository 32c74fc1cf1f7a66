//! Command line interface for motifscan.

use crate::config::{GenerationConfig, Mode, SessionConfig, DEFAULT_MAX_ATTEMPTS};
use crate::error::{MotifError, Result};
use crate::generate::ProbabilityVector;
use clap::{Parser, ValueEnum};

/// Run mode selected on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    /// Generate new sequences, persist them and analyze them
    Generate,
    /// Analyze an existing corpus without generating
    Read,
}

/// Command line arguments for motifscan.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// corpus file the sequences are written to or read from
    #[arg(long)]
    pub corpus: String,

    /// run mode
    #[arg(long, value_enum, default_value_t = CliMode::Generate)]
    pub mode: CliMode,

    /// number of sequences to generate
    #[arg(long, default_value_t = 100)]
    pub loops: usize,

    /// minimum sequence length, inclusive
    #[arg(long, default_value_t = 20)]
    pub min_size: usize,

    /// maximum sequence length, exclusive
    #[arg(long, default_value_t = 50)]
    pub max_size: usize,

    /// cumulative probability thresholds for A, C, G, T
    #[arg(long, num_args = 4, value_names = ["A", "C", "G", "T"],
          default_values_t = [0.25, 0.5, 0.75, 1.0])]
    pub probabilities: Vec<f64>,

    /// motif length to count
    #[arg(long, default_value_t = 4)]
    pub motif_size: usize,

    /// minimum Shannon entropy (bits) a generated sequence must reach
    #[arg(long, default_value_t = 0.0)]
    pub entropy_threshold: f64,

    /// give up after this many consecutive entropy rejections
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// seed the generator for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// count sequences in parallel (read mode)
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// emit the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// enable verbose output
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Build the validated session configuration.
    pub fn to_config(&self) -> Result<SessionConfig> {
        let mode = match self.mode {
            CliMode::Generate => {
                let thresholds: [f64; 4] = self
                    .probabilities
                    .as_slice()
                    .try_into()
                    .map_err(|_| MotifError::config("exactly 4 probability thresholds required"))?;
                Mode::Generate(GenerationConfig {
                    loops: self.loops,
                    min_size: self.min_size,
                    max_size: self.max_size,
                    probabilities: ProbabilityVector::new(thresholds)?,
                    entropy_threshold: self.entropy_threshold,
                    max_attempts: self.max_attempts,
                    seed: self.seed,
                })
            }
            CliMode::Read => Mode::ReadExisting,
        };

        let config = SessionConfig {
            mode,
            motif_size: self.motif_size,
            parallel: self.parallel,
        };
        config.validate()?;
        Ok(config)
    }
}
