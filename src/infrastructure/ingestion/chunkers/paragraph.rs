//! Paragraph-based chunking strategy

use crate::domain::ingestion::{chunker::helpers, ChunkingConfig, ChunkingStrategy};
use crate::domain::DomainError;

const PARAGRAPH_JOINER: &str = "\n\n";

/// Chunking strategy that packs whole paragraphs into chunks
///
/// Paragraphs are never split: one longer than `chunk_size` becomes a chunk
/// on its own. Overlap does not apply.
#[derive(Debug, Clone, Default)]
pub struct ParagraphChunker;

impl ParagraphChunker {
    /// Create a new paragraph chunker
    pub fn new() -> Self {
        Self
    }

    fn split_paragraphs(text: &str) -> Vec<&str> {
        text.split(PARAGRAPH_JOINER)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl ChunkingStrategy for ParagraphChunker {
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<String>, DomainError> {
        config.validate_size()?;

        if let Some(chunks) = helpers::trivial_chunks(content, config.chunk_size) {
            return Ok(chunks);
        }

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        // Every packed paragraph counts its joiner, including the first
        let mut current_len = 0;

        for paragraph in Self::split_paragraphs(content) {
            let paragraph_len = helpers::char_len(paragraph) + PARAGRAPH_JOINER.len();

            if current.is_empty() || current_len + paragraph_len <= config.chunk_size {
                current.push(paragraph);
                current_len += paragraph_len;
            } else {
                chunks.push(current.join(PARAGRAPH_JOINER));
                current = vec![paragraph];
                current_len = paragraph_len;
            }
        }

        if !current.is_empty() {
            chunks.push(current.join(PARAGRAPH_JOINER));
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "by_paragraph"
    }
}
