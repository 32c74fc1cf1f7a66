//! Session orchestration.
//!
//! A [`Session`] owns the frequency accumulator for one run and wires the
//! generator, entropy filter, corpus I/O and motif counter together. In
//! generate mode each accepted sequence is persisted and counted as it is
//! produced; in read mode the whole corpus is ingested and counted, either
//! sequentially or with the partition-then-merge parallel path.

use crate::config::{Mode, SessionConfig};
use crate::corpus;
use crate::decode;
use crate::error::{MotifError, Result};
use crate::generate::SequenceGenerator;
use crate::motif::{self, FrequencyTable};
use crate::report::MotifReport;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// One motif-analysis session, scoped to a single frequency table.
pub struct Session {
    config: SessionConfig,
    table: FrequencyTable,
}

impl Session {
    /// Validate the configuration and open a session around a fresh table.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Session {
            config,
            table: FrequencyTable::new(),
        })
    }

    /// Generate, filter, persist and count the configured number of
    /// sequences, then produce the report.
    ///
    /// Sequences are written to `sink` in generation order. Generation is
    /// sequential: persisted order and the single RNG stream are part of
    /// the contract.
    pub fn run_generate<W: Write>(&mut self, sink: &mut W) -> Result<MotifReport> {
        let generation = match &self.config.mode {
            Mode::Generate(generation) => generation.clone(),
            Mode::ReadExisting => {
                return Err(MotifError::config("generation requested for a read-mode session"));
            }
        };

        let mut generator = SequenceGenerator::new(&generation);
        for _ in 0..generation.loops {
            let sequence =
                generator.generate_accepted(generation.entropy_threshold, generation.max_attempts)?;
            corpus::write_sequence(sink, &sequence)?;
            self.table.count_sequence(&sequence, self.config.motif_size);
        }

        info!(
            sequences = generation.loops,
            unique_motifs = self.table.unique_motifs(),
            windows = self.table.total_windows(),
            "generation complete"
        );
        Ok(self.finish())
    }

    /// Ingest an existing corpus from `source`, count it and produce the
    /// report.
    pub fn run_read<R: BufRead>(&mut self, source: R) -> Result<MotifReport> {
        let sequences = corpus::read_corpus(source)?;
        let counted = if self.config.parallel {
            motif::count_corpus_parallel(&sequences, self.config.motif_size)
        } else {
            motif::count_corpus(&sequences, self.config.motif_size)
        };
        self.table.merge(counted);

        info!(
            sequences = sequences.len(),
            unique_motifs = self.table.unique_motifs(),
            windows = self.table.total_windows(),
            "corpus analysis complete"
        );
        Ok(self.finish())
    }

    fn finish(&self) -> MotifReport {
        for (pattern, count) in self.table.iter() {
            debug!(pattern = %decode(pattern), count, "pattern count");
        }
        MotifReport::from_table(&self.table)
    }

    /// The accumulated frequency table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::encode;
    use std::io::Cursor;

    fn generate_session(generation: GenerationConfig, motif_size: usize) -> Session {
        Session::new(SessionConfig {
            mode: Mode::Generate(generation),
            motif_size,
            parallel: false,
        })
        .unwrap()
    }

    fn read_session(motif_size: usize, parallel: bool) -> Session {
        Session::new(SessionConfig {
            mode: Mode::ReadExisting,
            motif_size,
            parallel,
        })
        .unwrap()
    }

    #[test]
    fn test_generate_persists_and_counts() {
        let mut sink = Vec::new();
        let mut session = generate_session(
            GenerationConfig {
                loops: 10,
                min_size: 8,
                max_size: 12,
                seed: Some(7),
                ..GenerationConfig::default()
            },
            3,
        );
        let report = session.run_generate(&mut sink).unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&sink).unwrap().lines().collect();
        assert_eq!(lines.len(), 10);
        for line in &lines {
            assert!(line.len() >= 8 && line.len() < 12);
            assert!(line.chars().all(|c| "ACGT".contains(c)));
        }
        assert!(report.selected.is_some());
        assert!(report.max_count >= 1);
    }

    #[test]
    fn test_generate_rejected_for_read_mode_session() {
        let mut session = read_session(4, false);
        let mut sink = Vec::new();
        assert!(session.run_generate(&mut sink).is_err());
    }

    #[test]
    fn test_read_counts_corpus() {
        let mut session = read_session(4, false);
        let report = session.run_read(Cursor::new("ACGTACGT\n")).unwrap();

        assert_eq!(session.table().get(&encode("ACGT").unwrap()), 2);
        assert_eq!(session.table().total_windows(), 5);
        assert_eq!(report.max_count, 2);
        assert_eq!(report.selected.as_deref(), Some("ACGT"));
    }

    #[test]
    fn test_read_empty_corpus_reports_no_motif() {
        let mut session = read_session(4, false);
        let report = session.run_read(Cursor::new("")).unwrap();
        assert_eq!(report.max_count, 0);
        assert!(report.selected.is_none());
    }

    #[test]
    fn test_sequences_shorter_than_motif_yield_no_windows() {
        let mut session = read_session(10, false);
        let report = session.run_read(Cursor::new("ACGT\nTTAA\n")).unwrap();
        assert!(session.table().is_empty());
        assert!(report.selected.is_none());
    }

    #[test]
    fn test_parallel_read_matches_sequential() {
        let corpus = "ACGTACGT\nGGGGCCCC\nATATATAT\nCAGTCAGTCA\n";

        let mut sequential = read_session(4, false);
        sequential.run_read(Cursor::new(corpus)).unwrap();

        let mut parallel = read_session(4, true);
        parallel.run_read(Cursor::new(corpus)).unwrap();

        assert_eq!(parallel.table(), sequential.table());
    }
}
