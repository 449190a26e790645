use std::io::BufRead;

use crate::errors::GotalignError;

/// Read a sequence pair from a two-line plain-text input: the first line is
/// sequence 1, the second line sequence 2. Lines are whitespace-trimmed and
/// any further lines are ignored. An empty line is a valid empty sequence.
pub fn read_pair<R: BufRead>(reader: R, origin: &str) -> Result<(Vec<u8>, Vec<u8>), GotalignError> {
    let mut lines = reader.lines();

    let mut next_sequence = |found: usize| -> Result<Vec<u8>, GotalignError> {
        match lines.next() {
            Some(line) => Ok(line?.trim().as_bytes().to_vec()),
            None => Err(GotalignError::MissingSequence { path: origin.to_string(), found }),
        }
    };

    let seq1 = next_sequence(0)?;
    let seq2 = next_sequence(1)?;

    Ok((seq1, seq2))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_two_line_pair() {
        let input = Cursor::new("GATTACA\nGCATGCU\n");
        let (seq1, seq2) = read_pair(input, "case1.txt").unwrap();

        assert_eq!(seq1, b"GATTACA");
        assert_eq!(seq2, b"GCATGCU");
    }

    #[test]
    fn test_trims_and_ignores_trailing_lines() {
        let input = Cursor::new("  GAT \r\nGCAT\nignored\n");
        let (seq1, seq2) = read_pair(input, "case2.txt").unwrap();

        assert_eq!(seq1, b"GAT");
        assert_eq!(seq2, b"GCAT");
    }

    #[test]
    fn test_missing_second_line() {
        let input = Cursor::new("GAT\n");
        let err = read_pair(input, "case3.txt").unwrap_err();

        match err {
            GotalignError::MissingSequence { path, found } => {
                assert_eq!(path, "case3.txt");
                assert_eq!(found, 1);
            },
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_is_empty_sequence() {
        let input = Cursor::new("GAT\n\n");
        let (seq1, seq2) = read_pair(input, "case4.txt").unwrap();

        assert_eq!(seq1, b"GAT");
        assert!(seq2.is_empty());
    }
}
