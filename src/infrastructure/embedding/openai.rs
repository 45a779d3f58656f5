//! OpenAI embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;
use crate::infrastructure::llm::{HttpClientTrait, DEFAULT_OPENAI_BASE_URL};

/// OpenAI embedding provider
#[derive(Debug)]
pub struct OpenAiEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiEmbeddingProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(
        &self,
        json: serde_json::Value,
        expected: usize,
    ) -> Result<EmbeddingResponse, DomainError> {
        let mut response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        if response.data.len() != expected {
            return Err(DomainError::provider(
                "openai",
                format!(
                    "Expected {} embeddings, received {}",
                    expected,
                    response.data.len()
                ),
            ));
        }

        response.data.sort_by_key(|d| d.index);
        let vectors = response.data.into_iter().map(|d| d.embedding).collect();

        Ok(EmbeddingResponse::new(response.model, vectors))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OpenAiEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let body = serde_json::json!({
            "model": request.model(),
            "input": request.inputs(),
        });

        let response = self
            .client
            .post_json(&self.embeddings_url(), self.headers(), &body)
            .await?;

        self.parse_response(response, request.inputs().len())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    model: String,
    data: Vec<OpenAiEmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::MockHttpClient;

    const TEST_URL: &str = "https://api.openai.com/v1/embeddings";

    #[tokio::test]
    async fn test_embed_batch_in_index_order() {
        let mock_response = serde_json::json!({
            "model": "text-embedding-3-small",
            "data": [
                {"index": 1, "embedding": [0.0, 1.0], "object": "embedding"},
                {"index": 0, "embedding": [1.0, 0.0], "object": "embedding"}
            ],
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        });
        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiEmbeddingProvider::new(client, "test-api-key");

        let request = EmbeddingRequest::batch(
            "text-embedding-3-small",
            vec!["first".to_string(), "second".to_string()],
        );
        let response = provider.embed(request).await.unwrap();

        assert_eq!(response.model(), "text-embedding-3-small");
        assert_eq!(response.into_vectors(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(
            provider.client.bodies()[0]["input"],
            serde_json::json!(["first", "second"])
        );
    }

    #[tokio::test]
    async fn test_embed_count_mismatch() {
        let mock_response = serde_json::json!({
            "model": "text-embedding-3-small",
            "data": [{"index": 0, "embedding": [1.0]}]
        });
        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiEmbeddingProvider::new(client, "k");

        let request = EmbeddingRequest::batch("text-embedding-3-small", vec!["a".into(), "b".into()]);
        let err = provider.embed(request).await.unwrap_err();

        assert!(err.to_string().contains("Expected 2 embeddings"));
    }

    #[tokio::test]
    async fn test_embed_error() {
        let client = MockHttpClient::new().with_error(TEST_URL, "Unauthorized");
        let provider = OpenAiEmbeddingProvider::new(client, "bad");

        let result = provider
            .embed(EmbeddingRequest::single("text-embedding-3-small", "x"))
            .await;
        assert!(result.is_err());
    }
}
