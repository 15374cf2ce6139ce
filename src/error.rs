//! Error types for canopy
//!
//! Only the root of a render can fail the whole operation. Anything that goes
//! wrong below the root is a [`ScanError`] and is rendered inline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal render failure.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The root path could not be stat'ed.
    #[error("cannot access '{path}': {source}")]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing rendered lines to the output failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// A directory that could not be listed.
///
/// The `Display` form is the bracketed diagnostic that replaces the
/// directory's children in the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("[permission denied]")]
    PermissionDenied,

    #[error("[error: {0}]")]
    Io(String),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied,
            _ => ScanError::Io(err.to_string()),
        }
    }
}

/// Model registry failures.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Strict lookup of a key that is neither built in nor registered.
    #[error("unknown model '{0}'")]
    UnknownModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_is_distinct() {
        let err: ScanError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err, ScanError::PermissionDenied);
        assert_eq!(err.to_string(), "[permission denied]");
    }

    #[test]
    fn other_errors_keep_message() {
        let err: ScanError = io::Error::other("disk on fire").into();
        assert_eq!(err.to_string(), "[error: disk on fire]");
    }

    #[test]
    fn path_not_found_names_the_path() {
        let err = TreeError::PathNotFound {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"), "{msg}");
        assert!(msg.contains("No such file or directory"), "{msg}");
    }
}
