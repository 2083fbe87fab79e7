//! Tool and dispatch error types.
//!
//! Every handler failure is one of the variants below; raw I/O errors and
//! extraction faults are wrapped, never propagated as bare strings or stack
//! traces. `UnknownTool` is the only failure that escapes the handler
//! boundary as a hard error.

use crate::security::SecurityError;
use thiserror::Error;

/// Failures a tool handler can surface to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required argument was absent from the request.
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    /// The path guard rejected the requested path.
    #[error("Permission denied: {reason}")]
    PermissionDenied { reason: String },

    /// Content extraction or decoding failed.
    #[error("Read failure: {message}")]
    ReadFailure { message: String },

    /// Any I/O fault on the write path other than a guard rejection.
    #[error("Write failure: {message}")]
    WriteFailure { message: String },
}

impl ToolError {
    /// Create a MissingArgument error for the named parameter.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        ToolError::MissingArgument { name: name.into() }
    }

    /// Create a ReadFailure wrapping a collaborator fault.
    pub fn read_failure(message: impl Into<String>) -> Self {
        ToolError::ReadFailure {
            message: message.into(),
        }
    }

    /// Create a WriteFailure wrapping an I/O fault.
    pub fn write_failure(message: impl Into<String>) -> Self {
        ToolError::WriteFailure {
            message: message.into(),
        }
    }
}

impl From<SecurityError> for ToolError {
    fn from(err: SecurityError) -> Self {
        ToolError::PermissionDenied {
            reason: err.to_string(),
        }
    }
}

/// Hard failures raised by the dispatcher itself, before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No tool with the requested name exists in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

/// Result type alias for tool handler operations.
pub type ToolResult<T> = Result<T, ToolError>;
