//! # Standard Tool Library
//!
//! The file-management operations exposed through the dispatch interface.
//! Every tool validates its paths through the core [`PathGuard`] before
//! touching the filesystem.

/// File system I/O operations and document extraction
pub mod io;

pub use io::{
    AtomicWriter, ListDirectoriesTool, ReadPdfTool, ReadTxtTool, ReadWordDocumentTool,
    WriteFileTool,
};

use crate::registry::InMemoryToolRegistry;
use filedeck_core::PathGuard;
use std::sync::Arc;

/// Build the registry holding the five standard file tools.
///
/// Catalogue order matches the published tool table: `list_directories`,
/// `read_txt`, `read_word_document`, `read_pdf`, `write_file`.
pub fn file_tool_registry(guard: Arc<PathGuard>) -> InMemoryToolRegistry {
    InMemoryToolRegistry::new()
        .with_tool(Arc::new(ListDirectoriesTool::new(Arc::clone(&guard))))
        .with_tool(Arc::new(ReadTxtTool::new(Arc::clone(&guard))))
        .with_tool(Arc::new(ReadWordDocumentTool::new(Arc::clone(&guard))))
        .with_tool(Arc::new(ReadPdfTool::new(Arc::clone(&guard))))
        .with_tool(Arc::new(WriteFileTool::new(guard)))
}
