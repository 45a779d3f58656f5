//! Document ingestion infrastructure
//!
//! Chunking strategies and document loading.

pub mod chunkers;
pub mod factory;
pub mod loader;

pub use chunkers::{FixedOverlapChunker, ParagraphChunker};
pub use factory::{chunk_document, ChunkerFactory};
pub use loader::load_document;
