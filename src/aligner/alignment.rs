use serde::Serialize;

/// Character used for gaps in the rendered alignment rows.
pub const GAP: u8 = b'-';

/// An aligned pair of positions. The first element is a position in
/// sequence 1, the second a position in sequence 2.
///
/// In case of an insertion or deletion, one of the elements is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    pub pos1: Option<usize>,
    pub pos2: Option<usize>,
}

impl AlignedPair {
    pub fn new(pos1: Option<usize>, pos2: Option<usize>) -> Self {
        Self { pos1, pos2 }
    }

    pub fn is_aligned(&self) -> bool {
        matches!((self.pos1, self.pos2), (Some(_), Some(_)))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }
}

pub type Alignment = Vec<AlignedPair>;

/// One optimal global alignment of a sequence pair, as reconstructed by
/// traceback: the two gapped rows (always equal length), the per-column pair
/// list, and the optimal score from the grid's terminal cell.
///
/// The rows are kept as raw bytes so that any symbol content is accepted;
/// stripping the gap markers from a row reproduces the input sequence
/// byte-for-byte. Conversion to text happens only when rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentResult {
    pub aligned1: Vec<u8>,
    pub aligned2: Vec<u8>,
    pub alignment: Alignment,
    pub score: f64,
}

impl AlignmentResult {
    /// Render the alignment as three rows: sequence 1, a marker row
    /// (`|` match, `*` mismatch, space for indels), and sequence 2.
    /// Bytes that are not valid UTF-8 are rendered as replacement characters.
    pub fn pretty(&self) -> String {
        let marker_row: String = self.aligned1.iter()
            .zip(self.aligned2.iter())
            .map(|(&a, &b)| {
                if a == GAP || b == GAP {
                    ' '
                } else if a == b {
                    '|'
                } else {
                    '*'
                }
            })
            .collect();

        format!(
            "{}\n{}\n{}",
            String::from_utf8_lossy(&self.aligned1),
            marker_row,
            String::from_utf8_lossy(&self.aligned2),
        )
    }
}

/// Serializable per-case report for the JSON output mode.
#[derive(Debug, Serialize)]
pub struct AlignmentReport {
    pub name: String,
    pub aligned_sequence1: String,
    pub aligned_sequence2: String,
    pub optimal_score: f64,
}

impl AlignmentReport {
    pub fn new(name: &str, result: &AlignmentResult) -> Self {
        Self {
            name: name.to_string(),
            aligned_sequence1: String::from_utf8_lossy(&result.aligned1).into_owned(),
            aligned_sequence2: String::from_utf8_lossy(&result.aligned2).into_owned(),
            optimal_score: result.score,
        }
    }
}
