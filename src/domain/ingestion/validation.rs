//! Validation helpers for ingestion

use super::document::DocumentType;

/// Detect document type from filename extension
pub fn detect_document_type(filename: &str) -> Option<DocumentType> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();

    [DocumentType::PlainText, DocumentType::Markdown, DocumentType::Pdf]
        .into_iter()
        .find(|doc_type| doc_type.extensions().contains(&ext.as_str()))
}
