//! Passage type produced by chunking and returned by retrieval

use serde::{Deserialize, Serialize};

/// Where a passage came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassageMetadata {
    /// Display name of the source document
    pub source: String,
    /// Zero-based position of the passage within its source document
    pub chunk_index: usize,
}

/// An immutable fragment of a source document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passage {
    content: String,
    metadata: PassageMetadata,
}

impl Passage {
    /// Create a new passage
    pub fn new(content: impl Into<String>, source: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            content: content.into(),
            metadata: PassageMetadata {
                source: source.into(),
                chunk_index,
            },
        }
    }

    /// Number a document's chunks in order, all attributed to `source`
    pub fn from_chunks(source: &str, chunks: Vec<String>) -> Vec<Self> {
        chunks
            .into_iter()
            .enumerate()
            .map(|(index, content)| Self::new(content, source, index))
            .collect()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &PassageMetadata {
        &self.metadata
    }

    pub fn source(&self) -> &str {
        &self.metadata.source
    }

    pub fn chunk_index(&self) -> usize {
        self.metadata.chunk_index
    }
}
