use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::PathBuf;

/// Failures outside the sorters: file access and argument handling.
///
/// The sorters themselves cannot fail; an unavailable gap sequence is
/// absorbed by the single-gap fallback and never shows up here.
#[derive(Debug)]
pub enum Error {
    /// The file could not be opened or created.
    Open { path: PathBuf, source: io::Error },

    /// The input file was opened but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// Writing or flushing the output file failed.
    Write { path: PathBuf, source: io::Error },

    /// Wrong argument count or unknown mode flag.
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Error::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Error::Write { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            Error::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Open { source, .. } | Error::Read { source, .. } | Error::Write { source, .. } => {
                Some(source)
            }
            Error::InvalidArguments(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_path() {
        let err = Error::Open {
            path: PathBuf::from("/no/such/file"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot open /no/such/file"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_arguments_has_no_source() {
        let err = Error::InvalidArguments("expected 3 arguments, got 1".to_string());
        assert_eq!(err.to_string(), "invalid arguments: expected 3 arguments, got 1");
        assert!(err.source().is_none());
    }
}
