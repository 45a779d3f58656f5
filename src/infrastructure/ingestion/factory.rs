//! Factory for creating chunkers

use std::sync::Arc;

use crate::domain::ingestion::{ChunkingConfig, ChunkingStrategy, ChunkingType};
use crate::domain::DomainError;

use super::chunkers::{FixedOverlapChunker, ParagraphChunker};

/// Factory for creating chunking strategies
#[derive(Debug, Default)]
pub struct ChunkerFactory;

impl ChunkerFactory {
    /// Create a chunker for the given type
    pub fn create(chunking_type: ChunkingType) -> Arc<dyn ChunkingStrategy> {
        match chunking_type {
            ChunkingType::FixedOverlap => Arc::new(FixedOverlapChunker::new()),
            ChunkingType::ByParagraph => Arc::new(ParagraphChunker::new()),
        }
    }

    /// Create a chunker from its strategy name
    pub fn create_by_name(name: &str) -> Result<Arc<dyn ChunkingStrategy>, DomainError> {
        Ok(Self::create(name.parse()?))
    }

    /// Get a list of all available chunking types
    pub fn available_types() -> Vec<ChunkingType> {
        vec![ChunkingType::FixedOverlap, ChunkingType::ByParagraph]
    }
}

/// Chunk a document with the named strategy
pub fn chunk_document(
    text: &str,
    strategy: &str,
    config: &ChunkingConfig,
) -> Result<Vec<String>, DomainError> {
    ChunkerFactory::create_by_name(strategy)?.chunk(text, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_chunkers() {
        assert_eq!(
            ChunkerFactory::create(ChunkingType::FixedOverlap).name(),
            "fixed_overlap"
        );
        assert_eq!(
            ChunkerFactory::create(ChunkingType::ByParagraph).name(),
            "by_paragraph"
        );
    }

    #[test]
    fn test_every_available_type_round_trips_by_name() {
        for chunking_type in ChunkerFactory::available_types() {
            let chunker = ChunkerFactory::create_by_name(chunking_type.as_str()).unwrap();
            assert_eq!(chunker.name(), chunking_type.as_str());
        }
    }

    #[test]
    fn test_unknown_strategy_is_configuration_error() {
        let err = chunk_document("text", "sliding_window", &ChunkingConfig::default()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_strategy_rejected_even_for_empty_text() {
        assert!(chunk_document("", "nope", &ChunkingConfig::default()).is_err());
    }

    #[test]
    fn test_chunk_document_short_text() {
        for strategy in ["fixed_overlap", "by_paragraph"] {
            let chunks = chunk_document("  tiny  ", strategy, &ChunkingConfig::default()).unwrap();
            assert_eq!(chunks, vec!["tiny"]);
        }
    }
}
