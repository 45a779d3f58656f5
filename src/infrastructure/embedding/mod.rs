//! Embedding provider implementations

mod factory;
mod openai;

pub use factory::EmbeddingProviderFactory;
pub use openai::OpenAiEmbeddingProvider;
