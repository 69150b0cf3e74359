//! Error types for attribute extraction

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a document or rendering a selection.
///
/// A requested attribute that is absent from the document is not an error;
/// see [`crate::not_found_placeholder`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },
    /// The input path exists but could not be read.
    #[error("Error reading file: {}", .path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The file content is not valid JSON.
    #[error("Error decoding JSON from file: {}", .path.display())]
    Parse {
        /// Path that was requested
        path: PathBuf,
        /// Parser error with line/column
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed, but its top level is not an object.
    #[error(
        "Expected a JSON object at the top level of {}, found {found}",
        .path.display()
    )]
    NotAnObject {
        /// Path that was requested
        path: PathBuf,
        /// JSON kind found at the top level
        found: &'static str,
    },
    /// Serializing the selection failed.
    #[error("JSON render error: {0}")]
    Render(#[source] serde_json::Error),
    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Path of the input document, for load failures.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExtractError::FileNotFound { path }
            | ExtractError::Read { path, .. }
            | ExtractError::Parse { path, .. }
            | ExtractError::NotAnObject { path, .. } => Some(path),
            ExtractError::Render(_) | ExtractError::Io(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ExtractError>;
