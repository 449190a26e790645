use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum GotalignError {
    /// An input case did not contain the two sequences we need
    MissingSequence { path: String, found: usize },

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Other IO errors
    IOError(io::Error),

    /// Other miscellaneous gotalign errors
    Other,
}

impl Error for GotalignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for GotalignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for GotalignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::MissingSequence { ref path, found } =>
                write!(f, "Input {path} holds {found} sequence(s), but an alignment case needs two!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::IOError(ref err) =>
                err.fmt(f),
            Self::Other =>
                write!(f, "Gotalign error!"),
        }
    }
}
