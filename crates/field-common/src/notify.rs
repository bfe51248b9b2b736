//! Load-result notification payloads for the UI shell.
//!
//! The core never presents dialogs itself; after every load attempt it hands
//! the shell one of these payloads to display in a blocking message box.

use serde::{Deserialize, Serialize};

use crate::error::{basename, LoadError};

/// How the shell should present a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational dialog (successful load).
    Info,
    /// Critical/error dialog (failed load).
    Critical,
}

/// A human-readable dialog payload produced after a load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Payload for a successful load of `path`.
    pub fn load_success(path: &str) -> Self {
        Self {
            severity: Severity::Info,
            title: "Success!".to_string(),
            message: format!("Successfully loaded {}.", basename(path)),
        }
    }

    /// Payload for a failed load attempt.
    pub fn load_failure(path: &str, error: &LoadError) -> Self {
        let message = match error {
            LoadError::EmptyPath => "No file selected! Try Again.".to_string(),
            LoadError::ParseFailure { .. } => {
                format!("Could not load {}.", basename(path))
            }
        };
        Self {
            severity: Severity::Critical,
            title: "Error!".to_string(),
            message,
        }
    }

    /// Build the payload for a finished load attempt.
    pub fn for_load(path: &str, result: &Result<(), LoadError>) -> Self {
        match result {
            Ok(()) => Self::load_success(path),
            Err(e) => Self::load_failure(path, e),
        }
    }
}
