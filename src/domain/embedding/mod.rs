//! Embedding provider domain models and traits
//!
//! Embeddings are only consumed by vector store adapters; the pipelines
//! never see a vector.

mod provider;
mod types;

pub use provider::EmbeddingProvider;
pub use types::{cosine_similarity, EmbeddingRequest, EmbeddingResponse};

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
