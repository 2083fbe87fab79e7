//! Security error types.

use thiserror::Error;

/// Failures raised by path validation and root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    /// The path resolved outside every allowed root.
    #[error("Path not allowed: {path}")]
    PathNotAllowed { path: String },

    /// The path could not be resolved to a canonical form.
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// An allowed root supplied at startup is unusable.
    #[error("Invalid allowed root: {path}: {reason}")]
    InvalidRoot { path: String, reason: String },

    /// No allowed roots were configured.
    #[error("No allowed root directories configured")]
    NoRootsConfigured,
}
