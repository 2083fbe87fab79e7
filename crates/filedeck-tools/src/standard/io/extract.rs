//! Content extraction pass-throughs.
//!
//! Thin wrappers over the external parsing and decoding crates. No logic of
//! its own beyond the encoding fallback: every fault maps to
//! [`ToolError::ReadFailure`].

use filedeck_core::ToolError;
use std::fs;
use std::path::Path;

/// How many bytes are sniffed for encoding detection.
const DETECT_SAMPLE_BYTES: usize = 1000;

/// Below this detector confidence the file is decoded as UTF-8.
const DETECT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Read a text file, detecting its encoding from a leading sample.
pub fn read_text(path: &Path) -> Result<String, ToolError> {
    let bytes = fs::read(path)
        .map_err(|e| ToolError::read_failure(format!("could not read {}: {e}", path.display())))?;

    let sample = &bytes[..bytes.len().min(DETECT_SAMPLE_BYTES)];
    let (charset, confidence, _language) = chardet::detect(sample);

    let encoding = if confidence > DETECT_CONFIDENCE_THRESHOLD {
        encoding_rs::Encoding::for_label(chardet::charset2encoding(&charset).as_bytes())
            .unwrap_or(encoding_rs::UTF_8)
    } else {
        encoding_rs::UTF_8
    };

    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

/// Extract the text of every PDF page, joined with newlines.
pub fn read_pdf(path: &Path) -> Result<String, ToolError> {
    let document = lopdf::Document::load(path).map_err(|e| {
        ToolError::read_failure(format!("could not open PDF {}: {e}", path.display()))
    })?;

    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        let text = document.extract_text(&[*page_number]).map_err(|e| {
            ToolError::read_failure(format!("could not extract page {page_number}: {e}"))
        })?;
        pages.push(text);
    }

    Ok(pages.join("\n"))
}

/// Extract the full paragraph text of a Word document.
pub fn read_word_document(path: &Path) -> Result<String, ToolError> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let bytes = fs::read(path)
        .map_err(|e| ToolError::read_failure(format!("could not read {}: {e}", path.display())))?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| {
        ToolError::read_failure(format!(
            "could not parse Word document {}: {e}",
            path.display()
        ))
    })?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}
