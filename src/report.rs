//! Dominant-motif selection and report assembly.

use crate::decode;
use crate::motif::FrequencyTable;
use serde::Serialize;
use std::fmt;

/// Length of the longest run of identical adjacent symbols in a motif.
pub fn longest_run(motif: &[u8]) -> usize {
    let mut best = 0usize;
    let mut current = 0usize;
    let mut prev: Option<u8> = None;
    for &base in motif {
        if prev == Some(base) {
            current += 1;
        } else {
            current = 1;
            prev = Some(base);
        }
        best = best.max(current);
    }
    best
}

/// Outcome of one analysis session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MotifReport {
    /// Greatest occurrence count observed, zero for an empty table
    pub max_count: u64,
    /// Every motif achieving `max_count`, lexicographically sorted
    pub tied: Vec<String>,
    /// The winning motif after tie-breaking, `None` for an empty table
    pub selected: Option<String>,
}

impl MotifReport {
    /// Select the dominant motif from an accumulated frequency table.
    ///
    /// Ranking keys, in order: occurrence count, longest run of identical
    /// adjacent symbols, lexicographically smallest motif. The final key
    /// makes selection deterministic when the first two tie.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let max_count = table.iter().map(|(_, count)| count).max().unwrap_or(0);
        if max_count == 0 {
            return MotifReport {
                max_count: 0,
                tied: Vec::new(),
                selected: None,
            };
        }

        let mut tied: Vec<&[u8]> = table
            .iter()
            .filter(|&(_, count)| count == max_count)
            .map(|(motif, _)| motif)
            .collect();
        tied.sort_unstable();

        // Scanning the sorted set and replacing only on a strictly longer
        // run keeps the lexicographically smallest motif among run ties.
        let mut selected: Option<(&[u8], usize)> = None;
        for &motif in &tied {
            let run = longest_run(motif);
            match selected {
                Some((_, best_run)) if run <= best_run => {}
                _ => selected = Some((motif, run)),
            }
        }

        MotifReport {
            max_count,
            tied: tied.iter().map(|motif| decode(motif)).collect(),
            selected: selected.map(|(motif, _)| decode(motif)),
        }
    }
}

impl fmt::Display for MotifReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selected {
            Some(motif) => {
                writeln!(f, "Most frequent motif: {} ({} occurrences)", motif, self.max_count)?;
                if self.tied.len() > 1 {
                    writeln!(f, "Tied at {}: {}", self.max_count, self.tied.join(", "))?;
                }
                Ok(())
            }
            None => writeln!(f, "No motif found"),
        }
    }
}
