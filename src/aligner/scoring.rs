/// Cost model seam for the alignment recurrence.
///
/// Scores are plain `f64` so the model can express rewards (positive) as well
/// as penalties (negative); the recurrence never inspects signs.
pub trait AlignmentCosts: Copy {
    /// Score of placing symbol `a` of sequence 1 against symbol `b` of sequence 2.
    fn substitution(&self, a: u8, b: u8) -> f64;

    /// Cost of starting a new run of gap characters.
    fn gap_open(&self) -> f64;

    /// Cost of continuing a run of gap characters already in progress.
    fn gap_extend(&self) -> f64;
}

/// Gap-affine scoring: opening a gap costs more than extending one, which
/// favors fewer, longer gaps over many short ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapAffine {
    match_score: f64,
    mismatch_score: f64,
    cost_gap_open: f64,
    cost_gap_extend: f64,
}

impl GapAffine {
    pub fn new(match_score: f64, mismatch_score: f64, cost_gap_open: f64, cost_gap_extend: f64) -> Self {
        Self { match_score, mismatch_score, cost_gap_open, cost_gap_extend }
    }

    #[inline(always)]
    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    #[inline(always)]
    pub fn mismatch_score(&self) -> f64 {
        self.mismatch_score
    }
}

impl Default for GapAffine {
    /// Reference defaults: match 3, mismatch -1, gap open -1, gap extend -0.5.
    fn default() -> Self {
        Self::new(3.0, -1.0, -1.0, -0.5)
    }
}

impl AlignmentCosts for GapAffine {
    #[inline(always)]
    fn substitution(&self, a: u8, b: u8) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline(always)]
    fn gap_open(&self) -> f64 {
        self.cost_gap_open
    }

    #[inline(always)]
    fn gap_extend(&self) -> f64 {
        self.cost_gap_extend
    }
}
