//! Shannon entropy over observed symbol frequencies.

use crate::ALPHABET_SIZE;

/// Upper bound on the entropy of a 4-symbol sequence, log2(4) bits.
/// Thresholds above this value reject every possible sequence.
pub const MAX_ENTROPY_BITS: f64 = 2.0;

/// Compute the Shannon entropy of a sequence in bits.
///
/// H = -sum p_i * log2(p_i) over the empirical frequency of each symbol
/// actually present; absent symbols contribute nothing (no smoothing).
/// A single-symbol sequence has entropy 0; an even four-symbol mix
/// reaches [`MAX_ENTROPY_BITS`].
pub fn shannon_entropy(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let mut count = [0usize; ALPHABET_SIZE];
    for &base in seq {
        if (base as usize) < ALPHABET_SIZE {
            count[base as usize] += 1;
        }
    }

    let n = seq.len() as f64;
    let mut answer = 0.0;
    for &cnt in &count {
        if cnt > 0 {
            let p = cnt as f64 / n;
            answer -= p * p.log2();
        }
    }
    answer
}
