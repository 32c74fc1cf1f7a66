//! Line-per-sequence corpus reading and writing.
//!
//! The storage format is one sequence per line, plain {A, C, G, T} symbols,
//! newline-terminated, no header and no trailing metadata. The core works
//! against reader/writer capabilities; resolving a corpus name to a path is
//! the binary's concern.

use crate::error::{MotifError, Result};
use crate::{char_to_num, decode};
use std::io::{BufRead, Write};
use tracing::debug;

/// Read every sequence from a corpus, one per line.
///
/// Trailing whitespace is ignored and fully-empty lines are skipped. Any
/// other symbol outside the alphabet is a parse error naming the offending
/// 1-based line number.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut sequences = Vec::new();
    for (idx, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        let mut sequence = Vec::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            match char_to_num(c) {
                Some(code) => sequence.push(code),
                None => {
                    return Err(MotifError::parse(idx + 1, format!("invalid symbol '{c}'")));
                }
            }
        }
        sequences.push(sequence);
    }
    debug!(sequences = sequences.len(), "corpus loaded");
    Ok(sequences)
}

/// Append one sequence to the corpus in generation order.
pub fn write_sequence<W: Write>(writer: &mut W, sequence: &[u8]) -> Result<()> {
    writeln!(writer, "{}", decode(sequence))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use std::io::Cursor;

    #[test]
    fn test_read_corpus_lines() {
        let corpus = "ACGT\nTTAA\nGGGGG\n";
        let sequences = read_corpus(Cursor::new(corpus)).unwrap();
        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[0], encode("ACGT").unwrap());
        assert_eq!(sequences[2], encode("GGGGG").unwrap());
    }

    #[test]
    fn test_read_trims_and_skips_empty_lines() {
        let corpus = "ACGT  \n\nttaa\r\n";
        let sequences = read_corpus(Cursor::new(corpus)).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[1], encode("TTAA").unwrap());
    }

    #[test]
    fn test_invalid_symbol_names_line() {
        let corpus = "ACGT\nACXT\n";
        let err = read_corpus(Cursor::new(corpus)).unwrap_err();
        match err {
            MotifError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains('X'));
            }
            other => panic!("expected Parse error, got {other}"),
        }
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let sequences = vec![encode("ACGTACGT").unwrap(), encode("TTTT").unwrap()];
        let mut buffer = Vec::new();
        for seq in &sequences {
            write_sequence(&mut buffer, seq).unwrap();
        }
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "ACGTACGT\nTTTT\n");

        let read_back = read_corpus(Cursor::new(buffer)).unwrap();
        assert_eq!(read_back, sequences);
    }
}
