//! Error types for field-lab.

use thiserror::Error;

/// Result type alias using LoadError.
pub type FieldResult<T> = Result<T, LoadError>;

/// Errors raised while loading a grid file.
///
/// Loading is the only fallible operation in the core; render actions are
/// gated by the session state machine instead of returning errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file was selected (the user cancelled the picker).
    #[error("no file selected")]
    EmptyPath,

    /// The file was missing, unreadable, or not a rectangular numeric grid.
    #[error("could not load {file}: {reason}")]
    ParseFailure { file: String, reason: String },
}

impl LoadError {
    /// Create a ParseFailure error, keeping only the file name of the path.
    pub fn parse_failure(path: &str, reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            file: basename(path).to_string(),
            reason: reason.into(),
        }
    }
}

/// File name component of a path, for user-facing messages.
pub(crate) fn basename(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}
