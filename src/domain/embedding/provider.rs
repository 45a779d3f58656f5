//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// Trait for embedding providers (OpenAI, etc.)
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate embeddings for the given input
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Bag-of-words embedder: texts sharing words get similar vectors
    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        dimensions: usize,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockEmbeddingProvider {
        pub fn new(dimensions: usize) -> Self {
            Self {
                dimensions,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn vectorize(&self, text: &str) -> Vec<f32> {
            let mut vector = vec![0.0; self.dimensions];

            for word in text
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
            {
                let hash = word
                    .to_lowercase()
                    .bytes()
                    .fold(0xcbf2_9ce4_8422_2325u64, |acc, b| {
                        (acc ^ b as u64).wrapping_mul(0x0100_0000_01b3)
                    });
                vector[(hash % self.dimensions as u64) as usize] += 1.0;
            }

            vector
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            let vectors = request.inputs().iter().map(|t| self.vectorize(t)).collect();

            Ok(EmbeddingResponse::new(request.model(), vectors))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::embedding::cosine_similarity;

        #[tokio::test]
        async fn test_mock_provider_batch_input() {
            let provider = MockEmbeddingProvider::new(64);
            let request = EmbeddingRequest::batch(
                "mock-embedding",
                vec!["Hello".into(), "World".into()],
            );

            let response = provider.embed(request).await.unwrap();

            assert_eq!(response.len(), 2);
            assert!(response.into_vectors().iter().all(|v| v.len() == 64));
        }

        #[tokio::test]
        async fn test_shared_words_are_similar() {
            let provider = MockEmbeddingProvider::new(256);
            let request = EmbeddingRequest::batch(
                "mock-embedding",
                vec![
                    "contract value payment".into(),
                    "what is the contract value".into(),
                    "weather forecast tomorrow".into(),
                ],
            );

            let vectors = provider.embed(request).await.unwrap().into_vectors();

            assert!(
                cosine_similarity(&vectors[0], &vectors[1])
                    > cosine_similarity(&vectors[2], &vectors[1])
            );
        }

        #[tokio::test]
        async fn test_mock_provider_error() {
            let provider = MockEmbeddingProvider::new(8).with_error("API error");
            let result = provider
                .embed(EmbeddingRequest::single("mock-embedding", "Hello"))
                .await;

            assert!(result.is_err());
            assert_eq!(provider.calls(), 1);
        }
    }
}
