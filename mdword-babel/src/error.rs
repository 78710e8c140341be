//! Error types for conversion operations

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while converting a document
///
/// Markdown content never produces an error: malformed constructs degrade to
/// paragraphs. Only the surrounding I/O and the caller's arguments can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The caller did not supply exactly one source and one destination path
    InvalidArguments(String),
    /// The source could not be read or the destination could not be written
    FileAccess { path: PathBuf, message: String },
}

impl ConvertError {
    pub fn file_access(path: impl AsRef<Path>, err: &io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            ConvertError::FileAccess { path, message } => {
                write!(f, "Cannot access '{}': {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {}
