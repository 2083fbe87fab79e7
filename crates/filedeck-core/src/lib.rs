//! # Filedeck Core
//!
//! Core traits and types for the Filedeck file-management tool server.
//! This crate provides the tool abstraction, the typed error taxonomy and
//! the path containment guard that every filesystem-touching tool goes
//! through.

pub mod content;
pub mod error;
pub mod security;
pub mod tool;

pub use content::TextContent;
pub use error::{DispatchError, ToolError};
pub use security::{AllowedRoots, PathGuard, SecurityError, ValidatedPath};
pub use tool::{ExecutionResult, Tool, ToolArguments, ToolCall, ToolDescriptor};
