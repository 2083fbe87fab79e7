//! File system tools: listing, extraction and atomic writing.

mod atomic;
mod extract;
mod file;

pub use atomic::AtomicWriter;
pub use file::{
    ListDirectoriesTool, ReadPdfTool, ReadTxtTool, ReadWordDocumentTool, WriteFileTool,
};
