//! Source document types for ingestion

use serde::{Deserialize, Serialize};

/// Kind of source document, detected from the file extension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Plain text files
    PlainText,
    /// Markdown files, ingested as plain text
    Markdown,
    /// PDF files, text extracted page by page
    Pdf,
}

impl DocumentType {
    /// Get file extensions associated with this document type
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PlainText => &["txt", "text"],
            Self::Markdown => &["md", "markdown"],
            Self::Pdf => &["pdf"],
        }
    }
}

/// A document whose text has been loaded and is ready for chunking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Name used as the `source` of every passage cut from this document
    pub name: String,
    /// Raw document text
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
