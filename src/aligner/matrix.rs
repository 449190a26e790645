use std::ops::Index;

use crate::aligner::scoring::AlignmentCosts;

/// The move that produced a cell's best score, recorded for traceback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellOrigin {
    /// Origin cell (0, 0); traceback stops here
    Start,

    /// (Mis)match step consuming a symbol from both sequences
    Diagonal,

    /// Gap in sequence 2 (deletion from sequence 1's point of view)
    Up,

    /// Gap in sequence 1 (insertion from sequence 1's point of view)
    Left,
}

/// One entry of the dynamic programming grid.
///
/// `gap_open` tells dependent cells whether the best path ending here is
/// inside a gap run, so the next step in the same direction can pay the
/// cheaper extension penalty instead of opening anew. Cells are written once
/// during construction and never revisited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreCell {
    pub score: f64,
    pub origin: CellOrigin,
    pub gap_open: bool,
}

impl ScoreCell {
    fn new(score: f64, origin: CellOrigin, gap_open: bool) -> Self {
        Self { score, origin, gap_open }
    }
}

/// The completed (m+1) x (n+1) score grid for a pair of sequences of lengths
/// m and n. Row 0 and column 0 represent the empty-prefix boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreMatrix {
    cells: Vec<ScoreCell>,
    num_rows: usize,
    num_columns: usize,
}

impl ScoreMatrix {
    /// Fill the grid for `seq1` (rows) versus `seq2` (columns) under the
    /// given cost model.
    ///
    /// Accepts empty sequences: the grid degenerates to a single boundary
    /// row or column, and the optimal alignment is all gaps.
    pub fn build<C>(seq1: &[u8], seq2: &[u8], costs: &C) -> Self
    where
        C: AlignmentCosts,
    {
        let m = seq1.len();
        let n = seq2.len();

        let num_rows = m + 1;
        let num_columns = n + 1;
        let mut cells = vec![ScoreCell::new(0.0, CellOrigin::Start, false); num_rows * num_columns];

        // First boundary step on each axis pays the opening penalty; every
        // later boundary step extends the gap that is already open.
        if m >= 1 {
            cells[num_columns] = ScoreCell::new(costs.gap_open(), CellOrigin::Up, true);
        }
        if n >= 1 {
            cells[1] = ScoreCell::new(costs.gap_open(), CellOrigin::Left, true);
        }

        for i in 2..=m {
            let prev = cells[(i - 1) * num_columns].score;
            cells[i * num_columns] = ScoreCell::new(prev + costs.gap_extend(), CellOrigin::Up, true);
        }

        for j in 2..=n {
            let prev = cells[j - 1].score;
            cells[j] = ScoreCell::new(prev + costs.gap_extend(), CellOrigin::Left, true);
        }

        for i in 1..=m {
            for j in 1..=n {
                let diag_pred = cells[(i - 1) * num_columns + (j - 1)];
                let up_pred = cells[(i - 1) * num_columns + j];
                let left_pred = cells[i * num_columns + (j - 1)];

                let diag = diag_pred.score + costs.substitution(seq1[i - 1], seq2[j - 1]);
                let up = up_pred.score
                    + if up_pred.gap_open { costs.gap_extend() } else { costs.gap_open() };
                let left = left_pred.score
                    + if left_pred.gap_open { costs.gap_extend() } else { costs.gap_open() };

                let best = diag.max(up).max(left);

                // Tie-break order is diagonal, then up, then left. Comparisons
                // are exact: the traceback relies on reproducing these choices.
                let origin = if diag == best {
                    CellOrigin::Diagonal
                } else if up == best {
                    CellOrigin::Up
                } else {
                    CellOrigin::Left
                };

                // A diagonal step only closes the gap region if the diagonal
                // predecessor was itself outside one.
                let gap_open = diag != best || diag_pred.gap_open;

                cells[i * num_columns + j] = ScoreCell::new(best, origin, gap_open);
            }
        }

        Self { cells, num_rows, num_columns }
    }

    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Score of the bottom-right cell, i.e. the optimal global alignment score.
    pub fn optimal_score(&self) -> f64 {
        self.cells[self.cells.len() - 1].score
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = ScoreCell;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.num_rows && j < self.num_columns, "Cell index out of bounds!");
        &self.cells[i * self.num_columns + j]
    }
}
