//! Error types for dictionary loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a dictionary file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the dictionary.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON or an unexpected shape, with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    pub(crate) fn from_json(path: PathBuf, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            path,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
