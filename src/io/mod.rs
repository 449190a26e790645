pub mod fasta;
pub mod pairs;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use itertools::Itertools;

use crate::errors::GotalignError;

/// One named input case: a pair of sequences to align.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCase {
    pub name: String,
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
}

const FASTA_EXTENSIONS: &[&str] = &[".fa", ".fa.gz", ".fna", ".fna.gz", ".fasta", ".fasta.gz"];

fn is_fasta(path: &Path) -> bool {
    let path_as_str = path.to_string_lossy();
    FASTA_EXTENSIONS.iter().any(|ext| path_as_str.ends_with(ext))
}

/// Read a single input case from a file. FASTA inputs (by extension,
/// gzip-compressed or not) take their first two records; anything else is
/// parsed as a two-line plain-text pair.
pub fn read_case(path: &Path) -> Result<SequenceCase, GotalignError> {
    let is_gzipped = path.file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let reader: Box<dyn std::io::BufRead> = if is_gzipped {
        Box::new(File::open(path)
            .map(GzDecoder::new)
            .map(BufReader::new)
            .map_err(|source| GotalignError::FileReadError { source })?)
    } else {
        Box::new(File::open(path)
            .map(BufReader::new)
            .map_err(|source| GotalignError::FileReadError { source })?)
    };

    let name = path.file_name()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let (seq1, seq2) = if is_fasta(path) {
        fasta::read_pair(reader, &name)?
    } else {
        pairs::read_pair(reader, &name)?
    };

    Ok(SequenceCase { name, seq1, seq2 })
}

/// Expand the given paths into an ordered list of case files. Directories
/// contribute their regular files sorted by file name; plain paths are kept
/// in the order given.
pub fn collect_case_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, GotalignError> {
    let mut case_paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = input.read_dir()?
                .map_ok(|entry| entry.path())
                .collect::<Result<Vec<_>, _>>()?;

            case_paths.extend(
                entries.into_iter()
                    .filter(|p| p.is_file())
                    .sorted_by_key(|p| p.file_name().map(|v| v.to_owned())),
            );
        } else {
            case_paths.push(input.clone());
        }
    }

    Ok(case_paths)
}

/// Read every input case named by `inputs`, in deterministic order.
pub fn collect_cases(inputs: &[PathBuf]) -> Result<Vec<SequenceCase>, GotalignError> {
    collect_case_paths(inputs)?
        .iter()
        .map(|path| read_case(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_extension_detection() {
        assert!(is_fasta(Path::new("input/pair.fa")));
        assert!(is_fasta(Path::new("pair.fasta.gz")));
        assert!(is_fasta(Path::new("pair.fna")));
        assert!(!is_fasta(Path::new("pair.txt")));
        assert!(!is_fasta(Path::new("pair.fa.txt")));
    }
}
