//! Chunking strategy implementations

mod fixed_overlap;
mod paragraph;

pub use fixed_overlap::FixedOverlapChunker;
pub use paragraph::ParagraphChunker;
