pub mod alignment;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use alignment::{AlignedPair, Alignment, AlignmentResult};
pub use matrix::{CellOrigin, ScoreCell, ScoreMatrix};
pub use scoring::{AlignmentCosts, GapAffine};
pub use traceback::traceback;

/// Pairwise global aligner under a gap-affine cost model.
///
/// Holds only the cost model; every `align` call is an independent, pure
/// computation, so one aligner can be shared across threads.
pub struct GotalignAligner<C>
where
    C: AlignmentCosts,
{
    costs: C,
}

impl<C> GotalignAligner<C>
where
    C: AlignmentCosts,
{
    pub fn new(costs: C) -> Self {
        Self { costs }
    }

    /// Build the full dynamic programming grid for a sequence pair.
    ///
    /// The returned grid can be inspected directly, or handed to
    /// [`traceback`] to recover one optimal alignment.
    pub fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> ScoreMatrix
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        ScoreMatrix::build(seq1.as_ref(), seq2.as_ref(), &self.costs)
    }

    /// Align a sequence pair and reconstruct one optimal alignment.
    pub fn align_pair<S1, S2>(&self, seq1: S1, seq2: S2) -> AlignmentResult
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        let matrix = self.align(seq1.as_ref(), seq2.as_ref());
        traceback(seq1.as_ref(), seq2.as_ref(), &matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_and_pair_agree() {
        let aligner = GotalignAligner::new(GapAffine::default());

        let matrix = aligner.align("GATTACA", "GCATGCU");
        let result = aligner.align_pair("GATTACA", "GCATGCU");

        assert_eq!(matrix.optimal_score(), result.score);
        assert_eq!(result.score, 8.5);
    }
}
