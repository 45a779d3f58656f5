//! Document ingestion domain types and traits
//!
//! This module provides:
//! - `ChunkingStrategy` trait for splitting documents into passages
//! - `Passage`, the unit stored in and retrieved from a vector store
//! - Source document types and file-type detection

pub mod chunker;
pub mod document;
pub mod passage;
pub mod validation;

pub use chunker::{ChunkingConfig, ChunkingStrategy, ChunkingType, DEFAULT_SEPARATORS};
pub use document::{DocumentType, SourceDocument};
pub use passage::{Passage, PassageMetadata};
pub use validation::detect_document_type;
