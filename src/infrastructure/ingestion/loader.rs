//! Loading source documents from disk

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::domain::ingestion::{detect_document_type, DocumentType, SourceDocument};
use crate::domain::DomainError;

const PDF_PAGE_JOINER: &str = "\n\n";

/// Read a text, Markdown or PDF file
///
/// Text is decoded lossily as UTF-8. PDF pages are extracted in order and
/// joined with a blank line. `display_name` becomes the passage source; the
/// file name is used when none is given.
pub async fn load_document(
    path: &Path,
    display_name: Option<&str>,
) -> Result<SourceDocument, DomainError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let doc_type = detect_document_type(&file_name).ok_or_else(|| {
        DomainError::configuration(format!(
            "Unsupported file type: {}. Use .txt, .md or .pdf.",
            file_name
        ))
    })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::not_found(format!("File not found: {}", path.display())),
        _ => DomainError::internal(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    let text = match doc_type {
        DocumentType::Pdf => extract_pdf_text(bytes, file_name.clone()).await?,
        DocumentType::PlainText | DocumentType::Markdown => {
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };

    let name = display_name
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(file_name);

    Ok(SourceDocument::new(name, text))
}

async fn extract_pdf_text(bytes: Vec<u8>, file_name: String) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || pdf_pages_text(&bytes, &file_name))
        .await
        .map_err(|e| DomainError::internal(format!("PDF extraction task failed: {}", e)))?
}

/// Text of every page in page order; a page without extractable text is empty
fn pdf_pages_text(bytes: &[u8], file_name: &str) -> Result<String, DomainError> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| {
        DomainError::validation(format!("Failed to read PDF {}: {}", file_name, e))
    })?;

    let pages: Vec<String> = document
        .get_pages()
        .keys()
        .map(|&page| {
            document.extract_text(&[page]).unwrap_or_else(|e| {
                warn!(file = file_name, page, error = %e, "No text extracted from PDF page");
                String::new()
            })
        })
        .collect();

    Ok(pages.join(PDF_PAGE_JOINER))
}
