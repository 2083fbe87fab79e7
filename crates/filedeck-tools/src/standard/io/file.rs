//! The five file-management tools.
//!
//! Every tool validates its path arguments through [`PathGuard`] before
//! touching the filesystem, reads included.

use super::atomic::AtomicWriter;
use super::extract;
use filedeck_core::{ExecutionResult, PathGuard, TextContent, Tool, ToolArguments, ToolError};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// File extensions the listing tool reports.
const DOCUMENT_EXTENSIONS: [&str; 3] = ["txt", "docx", "pdf"];

fn file_path_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "file_path": {
                "type": "string",
                "description": description
            }
        },
        "required": ["file_path"]
    })
}

/// Recursive directory listing of supported document files.
pub struct ListDirectoriesTool {
    guard: Arc<PathGuard>,
}

impl ListDirectoriesTool {
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self { guard }
    }

    fn run(&self, arguments: &ToolArguments) -> Result<Vec<TextContent>, ToolError> {
        let directory_path = arguments.require("directory_path")?;
        let validated = self.guard.validate(directory_path)?;

        let mut files = Vec::new();
        collect_document_files(validated.as_path(), &mut files)
            .map_err(|e| ToolError::read_failure(format!("could not list directory: {e}")))?;

        if files.is_empty() {
            // An empty match is a successful, empty result, not a failure.
            return Ok(Vec::new());
        }

        Ok(vec![TextContent::new(files.join("\n"))])
    }
}

impl Tool for ListDirectoriesTool {
    fn name(&self) -> &str {
        "list_directories"
    }

    fn description(&self) -> &str {
        "List all supported document files (txt, docx, pdf) under a directory"
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "directory_path": {
                    "type": "string",
                    "description": "Directory path to list"
                }
            },
            "required": ["directory_path"]
        })
    }

    fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
        self.run(arguments).into()
    }
}

fn collect_document_files(dir: &Path, out: &mut Vec<String>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_document_files(&path, out)?;
        } else if is_document(&path) {
            out.push(path.to_string_lossy().into_owned());
        }
    }

    Ok(())
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Text file reading with encoding detection.
pub struct ReadTxtTool {
    guard: Arc<PathGuard>,
}

impl ReadTxtTool {
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self { guard }
    }

    fn run(&self, arguments: &ToolArguments) -> Result<Vec<TextContent>, ToolError> {
        let file_path = arguments.require("file_path")?;
        let validated = self.guard.validate(file_path)?;
        let text = extract::read_text(validated.as_path())?;
        Ok(vec![TextContent::new(text)])
    }
}

impl Tool for ReadTxtTool {
    fn name(&self) -> &str {
        "read_txt"
    }

    fn description(&self) -> &str {
        "Read the contents of a plain text file"
    }

    fn input_schema(&self) -> serde_json::Value {
        file_path_schema("Path of the txt file to read")
    }

    fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
        self.run(arguments).into()
    }
}

/// Word document text extraction.
pub struct ReadWordDocumentTool {
    guard: Arc<PathGuard>,
}

impl ReadWordDocumentTool {
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self { guard }
    }

    fn run(&self, arguments: &ToolArguments) -> Result<Vec<TextContent>, ToolError> {
        let file_path = arguments.require("file_path")?;
        let validated = self.guard.validate(file_path)?;
        let text = extract::read_word_document(validated.as_path())?;
        Ok(vec![TextContent::new(text)])
    }
}

impl Tool for ReadWordDocumentTool {
    fn name(&self) -> &str {
        "read_word_document"
    }

    fn description(&self) -> &str {
        "Read the contents of a Word document"
    }

    fn input_schema(&self) -> serde_json::Value {
        file_path_schema("Path of the Word document to read")
    }

    fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
        self.run(arguments).into()
    }
}

/// Per-page PDF text extraction.
pub struct ReadPdfTool {
    guard: Arc<PathGuard>,
}

impl ReadPdfTool {
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self { guard }
    }

    fn run(&self, arguments: &ToolArguments) -> Result<Vec<TextContent>, ToolError> {
        let file_path = arguments.require("file_path")?;
        let validated = self.guard.validate(file_path)?;
        let text = extract::read_pdf(validated.as_path())?;
        Ok(vec![TextContent::new(text)])
    }
}

impl Tool for ReadPdfTool {
    fn name(&self) -> &str {
        "read_pdf"
    }

    fn description(&self) -> &str {
        "Read the contents of a PDF file"
    }

    fn input_schema(&self) -> serde_json::Value {
        file_path_schema("Path of the PDF file to read")
    }

    fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
        self.run(arguments).into()
    }
}

/// Atomic, path-scoped file writing.
pub struct WriteFileTool {
    writer: AtomicWriter,
}

impl WriteFileTool {
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self {
            writer: AtomicWriter::new(guard),
        }
    }

    fn run(&self, arguments: &ToolArguments) -> Result<Vec<TextContent>, ToolError> {
        let file_name = arguments.require("file_name")?;
        let directory = arguments.require("file_path")?;
        let content = arguments.require("content")?;

        let target = self.writer.write(directory, file_name, content)?;

        Ok(vec![TextContent::new(format!(
            "Wrote {} bytes to {}",
            content.len(),
            target.display()
        ))])
    }
}

impl Tool for WriteFileTool {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Write a file into a directory, atomically"
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_name": {
                    "type": "string",
                    "description": "File name, including the extension"
                },
                "file_path": {
                    "type": "string",
                    "description": "Directory path to write the file into"
                },
                "content": {
                    "type": "string",
                    "description": "File content"
                }
            },
            "required": ["file_name", "file_path", "content"]
        })
    }

    fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
        self.run(arguments).into()
    }
}
