//! Sliding-window motif counting.
//!
//! A [`FrequencyTable`] is the per-session accumulator of motif occurrence
//! counts. It is an explicit value owned by the session and passed into each
//! counting call, never process-wide state. One table spans the entire
//! corpus: counts accumulate across every sequence and are never reset
//! within a session.

use rayon::prelude::*;
use std::collections::HashMap;

/// Accumulated occurrence counts for every fixed-length motif seen so far.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Vec<u8>, u64>,
    windows: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide a width-`k` window across `seq`, incrementing the count of the
    /// substring at every start offset in `[0, len - k]`.
    ///
    /// A sequence shorter than `k` (or `k == 0`) produces zero windows and
    /// leaves the table untouched.
    pub fn count_sequence(&mut self, seq: &[u8], k: usize) {
        if k == 0 || seq.len() < k {
            return;
        }
        for window in seq.windows(k) {
            *self.counts.entry(window.to_vec()).or_insert(0) += 1;
            self.windows += 1;
        }
    }

    /// Fold another table into this one.
    ///
    /// Count addition is commutative and associative, so the merge order of
    /// partial tables cannot change the final counts.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (motif, count) in other.counts {
            *self.counts.entry(motif).or_insert(0) += count;
        }
        self.windows += other.windows;
    }

    /// Occurrence count of a specific motif, zero if never seen.
    pub fn get(&self, motif: &[u8]) -> u64 {
        self.counts.get(motif).copied().unwrap_or(0)
    }

    /// True when no window has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct motifs in the table.
    pub fn unique_motifs(&self) -> usize {
        self.counts.len()
    }

    /// Total number of windows counted across the whole corpus.
    pub fn total_windows(&self) -> u64 {
        self.windows
    }

    /// Iterate over (motif, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.counts.iter().map(|(motif, &count)| (motif.as_slice(), count))
    }
}

/// Count a whole corpus sequentially into a fresh table.
pub fn count_corpus(sequences: &[Vec<u8>], k: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for seq in sequences {
        table.count_sequence(seq, k);
    }
    table
}

/// Parallel equivalent of [`count_corpus`].
///
/// Sequences are partitioned across workers, each folding into a private
/// table; the partial tables are then merged. Final counts are identical to
/// the sequential accumulation.
pub fn count_corpus_parallel(sequences: &[Vec<u8>], k: usize) -> FrequencyTable {
    sequences
        .par_iter()
        .fold(FrequencyTable::new, |mut table, seq| {
            table.count_sequence(seq, k);
            table
        })
        .reduce(FrequencyTable::new, |mut acc, table| {
            acc.merge(table);
            acc
        })
}
