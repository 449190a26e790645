use std::io::BufRead;

use noodles::fasta;

use crate::errors::GotalignError;

/// Read a sequence pair from a FASTA input: the first two records become
/// sequence 1 and sequence 2. Any further records are ignored.
pub fn read_pair<R: BufRead>(reader: R, origin: &str) -> Result<(Vec<u8>, Vec<u8>), GotalignError> {
    let mut reader = fasta::io::Reader::new(reader);

    let mut sequences = Vec::with_capacity(2);
    for result in reader.records() {
        let record = result?;
        sequences.push(record.sequence().as_ref().to_vec());

        if sequences.len() == 2 {
            break;
        }
    }

    if sequences.len() < 2 {
        return Err(GotalignError::MissingSequence {
            path: origin.to_string(),
            found: sequences.len(),
        });
    }

    let seq2 = sequences.pop().unwrap();
    let seq1 = sequences.pop().unwrap();

    Ok((seq1, seq2))
}
