//! Chunking strategy trait and types

use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Separators tried, in priority order, when cutting a fixed-overlap window.
/// The empty separator marks the hard-cut fallback.
pub const DEFAULT_SEPARATORS: [&str; 5] = ["\n\n", "\n", ". ", " ", ""];

/// Configuration for chunking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum chunk size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Overlap between consecutive fixed-overlap windows in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    /// Split priorities for the fixed-overlap strategy
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
}

fn default_chunk_size() -> usize {
    512
}

fn default_chunk_overlap() -> usize {
    64
}

fn default_separators() -> Vec<String> {
    DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect()
}

impl ChunkingConfig {
    /// Create a new chunking configuration with the default separators
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            separators: default_separators(),
        }
    }

    /// Replace the separator priority list
    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Check the chunk size alone, for strategies that ignore overlap
    pub fn validate_size(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::configuration(
                "chunk_size must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Validate size and overlap
    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_size()?;

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::configuration(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self::new(default_chunk_size(), default_chunk_overlap())
    }
}

/// Named chunking strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingType {
    /// Fixed-size windows with overlap, cut on the best separator
    #[default]
    FixedOverlap,
    /// Whole paragraphs packed greedily up to the size limit
    ByParagraph,
}

impl ChunkingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedOverlap => "fixed_overlap",
            Self::ByParagraph => "by_paragraph",
        }
    }

    /// Validate a configuration for this strategy
    pub fn validate_config(&self, config: &ChunkingConfig) -> Result<(), DomainError> {
        match self {
            Self::FixedOverlap => config.validate(),
            Self::ByParagraph => config.validate_size(),
        }
    }
}

impl FromStr for ChunkingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed_overlap" => Ok(Self::FixedOverlap),
            "by_paragraph" => Ok(Self::ByParagraph),
            other => Err(DomainError::configuration(format!(
                "Unknown chunking strategy: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ChunkingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for chunking strategies
pub trait ChunkingStrategy: Send + Sync + Debug {
    /// Split content into trimmed, non-empty chunks
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<String>, DomainError>;

    /// Get the strategy name
    fn name(&self) -> &'static str;
}

/// Helper functions for chunking
pub mod helpers {
    /// Length of a string in characters
    pub fn char_len(text: &str) -> usize {
        text.chars().count()
    }

    /// Handle the inputs every strategy treats the same way.
    ///
    /// Blank text yields no chunks and text that already fits yields itself,
    /// trimmed. Returns `None` when the text has to be split.
    pub fn trivial_chunks(content: &str, chunk_size: usize) -> Option<Vec<String>> {
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Some(Vec::new());
        }

        if char_len(trimmed) <= chunk_size {
            return Some(vec![trimmed.to_string()]);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunking_config_default() {
        let config = ChunkingConfig::default();
        assert_eq!(config.chunk_size, 512);
        assert_eq!(config.chunk_overlap, 64);
        assert_eq!(config.separators, vec!["\n\n", "\n", ". ", " ", ""]);
    }

    #[test]
    fn test_chunking_config_validation() {
        assert!(ChunkingConfig::new(100, 50).validate().is_ok());
        assert!(ChunkingConfig::new(100, 0).validate().is_ok());

        let err = ChunkingConfig::new(0, 0).validate().unwrap_err();
        assert!(err.is_configuration());

        let err = ChunkingConfig::new(100, 100).validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validation_per_strategy() {
        let wide_overlap = ChunkingConfig::new(40, 64);

        assert!(wide_overlap.validate_size().is_ok());
        assert!(ChunkingType::ByParagraph.validate_config(&wide_overlap).is_ok());
        assert!(ChunkingType::FixedOverlap
            .validate_config(&wide_overlap)
            .unwrap_err()
            .is_configuration());

        let zero = ChunkingConfig::new(0, 0);
        assert!(ChunkingType::ByParagraph.validate_config(&zero).is_err());
    }

    #[test]
    fn test_chunking_type_from_str() {
        assert_eq!(
            "fixed_overlap".parse::<ChunkingType>().unwrap(),
            ChunkingType::FixedOverlap
        );
        assert_eq!(
            "by_paragraph".parse::<ChunkingType>().unwrap(),
            ChunkingType::ByParagraph
        );

        let err = "semantic".parse::<ChunkingType>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Unknown chunking strategy: semantic"));
    }

    #[test]
    fn test_chunking_type_serde() {
        let json = serde_json::to_string(&ChunkingType::ByParagraph).unwrap();
        assert_eq!(json, "\"by_paragraph\"");
    }

    #[test]
    fn test_trivial_chunks() {
        assert_eq!(helpers::trivial_chunks("", 10), Some(vec![]));
        assert_eq!(helpers::trivial_chunks("  \n\t ", 10), Some(vec![]));
        assert_eq!(
            helpers::trivial_chunks("  short  ", 10),
            Some(vec!["short".to_string()])
        );
        assert_eq!(helpers::trivial_chunks("this is far too long", 10), None);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(helpers::char_len("héllo"), 5);
        assert_eq!(helpers::trivial_chunks("ééééé", 5), Some(vec!["ééééé".to_string()]));
    }
}
