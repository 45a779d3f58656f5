//! Factory for the embedding provider and in-memory indexer

use std::sync::Arc;

use super::openai::OpenAiEmbeddingProvider;
use crate::config::EmbeddingConfig;
use crate::domain::{DomainError, EmbeddingProvider};
use crate::infrastructure::llm::{require_key, HttpClient, OPENAI_API_KEY_VAR};
use crate::infrastructure::vector_store::InMemoryIndexer;

/// Factory for the embedding provider and the indexer built on it
#[derive(Debug)]
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create the embedding provider, reading its API key from the environment
    pub fn create(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
        Self::create_with_keys(config, |name| std::env::var(name).ok())
    }

    pub fn create_with_keys<F>(
        config: &EmbeddingConfig,
        lookup: F,
    ) -> Result<Arc<dyn EmbeddingProvider>, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require_key(&lookup, OPENAI_API_KEY_VAR)?;
        let client = HttpClient::new();

        let provider = match &config.base_url {
            Some(base_url) => OpenAiEmbeddingProvider::with_base_url(client, api_key, base_url),
            None => OpenAiEmbeddingProvider::new(client, api_key),
        };

        Ok(Arc::new(provider))
    }

    /// Build an in-memory indexer around a provider using the configured model
    pub fn indexer(config: &EmbeddingConfig, provider: Arc<dyn EmbeddingProvider>) -> InMemoryIndexer {
        InMemoryIndexer::new(provider, &config.model)
            .with_similarity_floor(config.similarity_floor)
            .with_batch_size(config.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::domain::ingestion::Passage;
    use crate::domain::VectorStoreIndexer;

    #[test]
    fn test_create_requires_openai_key() {
        let err = EmbeddingProviderFactory::create_with_keys(&EmbeddingConfig::default(), |_| None)
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(OPENAI_API_KEY_VAR));
    }

    #[test]
    fn test_create_openai_provider() {
        let config = EmbeddingConfig {
            base_url: Some("http://localhost:8080/".to_string()),
            ..EmbeddingConfig::default()
        };

        let provider =
            EmbeddingProviderFactory::create_with_keys(&config, |_| Some("sk-test".to_string()))
                .unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[tokio::test]
    async fn test_indexer_uses_config() {
        let config = EmbeddingConfig {
            batch_size: 1,
            ..EmbeddingConfig::default()
        };
        let provider = Arc::new(MockEmbeddingProvider::new(16));
        let indexer = EmbeddingProviderFactory::indexer(&config, provider.clone());

        let store = indexer
            .index_passages(
                "c1",
                vec![
                    Passage::new("alpha", "a.txt", 0),
                    Passage::new("beta", "a.txt", 1),
                ],
            )
            .await
            .unwrap();

        assert_eq!(store.collection_id(), "c1");
        assert_eq!(store.passage_count(), 2);
        assert_eq!(provider.calls(), 2);
    }
}
