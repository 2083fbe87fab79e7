//! # Filedeck Tools
//!
//! The standard tool library behind the Filedeck dispatch interface:
//! directory listing, text/PDF/Word content extraction and atomic file
//! writing, plus the registry that routes named tool calls to their
//! handlers.
//!
//! ## Tools
//!
//! - `list_directories` — recursive listing of supported document files
//! - `read_txt` — text extraction with encoding detection
//! - `read_word_document` — Word document text extraction
//! - `read_pdf` — per-page PDF text extraction
//! - `write_file` — atomic, path-scoped file writing

/// Tool registry implementations for managing collections of tools.
pub mod registry;
/// Standard tool library providing the file-management operations.
pub mod standard;

pub use filedeck_core::{
    DispatchError, ExecutionResult, Tool, ToolArguments, ToolCall, ToolDescriptor, ToolError,
};
pub use registry::{InMemoryToolRegistry, ToolRegistry};
pub use standard::file_tool_registry;
pub use standard::io::{
    AtomicWriter, ListDirectoriesTool, ReadPdfTool, ReadTxtTool, ReadWordDocumentTool,
    WriteFileTool,
};
