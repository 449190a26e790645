use crate::aligner::alignment::{AlignedPair, Alignment, AlignmentResult, GAP};
use crate::aligner::matrix::{CellOrigin, ScoreMatrix};

/// Reconstruct one optimal alignment from a completed score grid.
///
/// Walks backward from the bottom-right cell, following the origin tag
/// recorded in each cell, until the `Start` cell is reached. Every step
/// strictly decreases `i + j`, so the walk terminates after at most
/// m + n steps.
pub fn traceback(seq1: &[u8], seq2: &[u8], matrix: &ScoreMatrix) -> AlignmentResult {
    assert_eq!(matrix.num_rows(), seq1.len() + 1, "Grid does not match sequence 1!");
    assert_eq!(matrix.num_columns(), seq2.len() + 1, "Grid does not match sequence 2!");

    let mut i = seq1.len();
    let mut j = seq2.len();

    let mut row1 = Vec::with_capacity(i + j);
    let mut row2 = Vec::with_capacity(i + j);
    let mut alignment = Alignment::with_capacity(i + j);

    loop {
        match matrix[(i, j)].origin {
            CellOrigin::Start => break,
            CellOrigin::Diagonal => {
                i -= 1;
                j -= 1;
                row1.push(seq1[i]);
                row2.push(seq2[j]);
                alignment.push(AlignedPair::new(Some(i), Some(j)));
            },
            CellOrigin::Up => {
                i -= 1;
                row1.push(seq1[i]);
                row2.push(GAP);
                alignment.push(AlignedPair::new(Some(i), None));
            },
            CellOrigin::Left => {
                j -= 1;
                row1.push(GAP);
                row2.push(seq2[j]);
                alignment.push(AlignedPair::new(None, Some(j)));
            },
        }
    }

    row1.reverse();
    row2.reverse();
    alignment.reverse();

    AlignmentResult {
        aligned1: row1,
        aligned2: row2,
        alignment,
        score: matrix.optimal_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::scoring::GapAffine;

    fn run(seq1: &[u8], seq2: &[u8], costs: &GapAffine) -> AlignmentResult {
        let matrix = ScoreMatrix::build(seq1, seq2, costs);
        traceback(seq1, seq2, &matrix)
    }

    fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
        aligned.iter().copied().filter(|b| *b != GAP).collect()
    }

    #[test]
    fn test_self_alignment_has_no_gaps() {
        let result = run(b"TTAGC", b"TTAGC", &GapAffine::default());

        assert_eq!(result.aligned1, b"TTAGC");
        assert_eq!(result.aligned2, b"TTAGC");
        assert_eq!(result.score, 5.0 * 3.0);
        assert!(result.alignment.iter().all(AlignedPair::is_aligned));
    }

    #[test]
    fn test_align_against_empty() {
        let result = run(b"ACGT", b"", &GapAffine::default());

        assert_eq!(result.aligned1, b"ACGT");
        assert_eq!(result.aligned2, b"----");
        // One opening plus three extensions
        assert_eq!(result.score, -1.0 + 3.0 * -0.5);

        let result = run(b"", b"ACGT", &GapAffine::default());
        assert_eq!(result.aligned1, b"----");
        assert_eq!(result.aligned2, b"ACGT");
    }

    #[test]
    fn test_both_empty() {
        let result = run(b"", b"", &GapAffine::default());

        assert!(result.aligned1.is_empty());
        assert!(result.aligned2.is_empty());
        assert_eq!(result.score, 0.0);
        assert!(result.alignment.is_empty());
    }

    #[test]
    fn test_golden_gattaca() {
        // Regression values validated against the reference implementation
        let result = run(b"GATTACA", b"GCATGCU", &GapAffine::default());

        assert_eq!(result.aligned1, b"G-ATTACA");
        assert_eq!(result.aligned2, b"GCA-TGCU");
        assert_eq!(result.score, 8.5);
    }

    #[test]
    fn test_golden_unequal_lengths() {
        let result = run(b"GATTACA", b"GCAT", &GapAffine::default());

        assert_eq!(result.aligned1, b"G-ATTACA");
        assert_eq!(result.aligned2, b"GCA-T---");
        assert_eq!(result.score, 6.0);

        let result = run(b"GAT", b"GCAT", &GapAffine::default());
        assert_eq!(result.aligned1, b"G-AT");
        assert_eq!(result.aligned2, b"GCAT");
        assert_eq!(result.score, 8.0);
    }

    #[test]
    fn test_outputs_equal_length_and_strip_to_inputs() {
        let cases: &[(&[u8], &[u8])] = &[
            (b"GATTACA", b"GCATGCU"),
            (b"A", b"TTTT"),
            (b"ACGTACGT", b"CG"),
            (b"", b"AC"),
        ];

        for (seq1, seq2) in cases {
            let result = run(seq1, seq2, &GapAffine::default());

            assert_eq!(result.aligned1.len(), result.aligned2.len());
            assert_eq!(strip_gaps(&result.aligned1), *seq1);
            assert_eq!(strip_gaps(&result.aligned2), *seq2);
            assert!(result.aligned1.len() <= seq1.len() + seq2.len());
        }
    }

    #[test]
    fn test_symbols_outside_utf8_are_accepted() {
        // Equality comparison is symbol-agnostic; rows are raw bytes, so
        // arbitrary byte content must align without failing.
        let result = run(b"\x80", b"", &GapAffine::default());
        assert_eq!(result.aligned1, [0x80]);
        assert_eq!(result.aligned2, b"-");

        let result = run(b"\x80\x81", b"\x80", &GapAffine::default());
        assert_eq!(result.aligned1.len(), result.aligned2.len());
        assert_eq!(strip_gaps(&result.aligned1), [0x80, 0x81]);
        assert_eq!(strip_gaps(&result.aligned2), [0x80]);
        assert_eq!(result.score, 3.0 - 1.0);
    }

    #[test]
    fn test_score_symmetry_under_symmetric_scoring() {
        let costs = GapAffine::default();
        let cases: &[(&[u8], &[u8])] = &[
            (b"GATTACA", b"GCATGCU"),
            (b"AAAC", b"TTTT"),
            (b"ACGT", b""),
        ];

        for (seq1, seq2) in cases {
            let forward = run(seq1, seq2, &costs);
            let backward = run(seq2, seq1, &costs);
            assert_eq!(forward.score, backward.score);
        }
    }

    #[test]
    fn test_very_negative_gaps_force_diagonal_path() {
        // Disjoint alphabets of equal length: with gaps this expensive the
        // optimal path is pure mismatches along the diagonal.
        let costs = GapAffine::new(3.0, -1.0, -100.0, -100.0);
        let result = run(b"AAAA", b"TTTT", &costs);

        assert_eq!(result.aligned1, b"AAAA");
        assert_eq!(result.aligned2, b"TTTT");
        assert_eq!(result.score, -4.0);
    }

    #[test]
    fn test_traceback_is_deterministic() {
        let costs = GapAffine::default();

        let first = run(b"GATTACA", b"GCATGCU", &costs);
        let second = run(b"GATTACA", b"GCATGCU", &costs);

        assert_eq!(first, second);
    }
}
