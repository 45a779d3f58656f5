//! In-memory cosine-similarity store for development and the CLI

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::embedding::{cosine_similarity, EmbeddingProvider, EmbeddingRequest};
use crate::domain::ingestion::Passage;
use crate::domain::vector_store::{VectorStore, VectorStoreIndexer};
use crate::domain::DomainError;

#[derive(Debug)]
struct IndexedPassage {
    passage: Passage,
    vector: Vec<f32>,
}

/// Read-only collection of embedded passages
#[derive(Debug)]
pub struct InMemoryVectorStore {
    collection_id: String,
    embedder: Arc<dyn EmbeddingProvider>,
    model: String,
    similarity_floor: f32,
    entries: Vec<IndexedPassage>,
}

impl InMemoryVectorStore {
    pub fn similarity_floor(&self) -> f32 {
        self.similarity_floor
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    fn collection_id(&self) -> &str {
        &self.collection_id
    }

    fn provider_type(&self) -> &'static str {
        "in_memory"
    }

    async fn similarity_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<Passage>, DomainError> {
        if self.entries.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self
            .embedder
            .embed(EmbeddingRequest::single(&self.model, query))
            .await?
            .into_vectors()
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::vector_store("Embedding provider returned no vector"))?;

        let mut scored: Vec<(f32, &Passage)> = self
            .entries
            .iter()
            .map(|e| (cosine_similarity(&query_vector, &e.vector), &e.passage))
            .filter(|(score, _)| *score >= self.similarity_floor)
            .collect();

        // stable: equal scores keep insertion order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(top_k);

        debug!(
            collection_id = %self.collection_id,
            candidates = self.entries.len(),
            returned = scored.len(),
            "Similarity search complete"
        );

        Ok(scored.into_iter().map(|(_, p)| p.clone()).collect())
    }

    fn passage_count(&self) -> usize {
        self.entries.len()
    }
}

/// Embeds passages in batches and builds `InMemoryVectorStore`s
#[derive(Debug, Clone)]
pub struct InMemoryIndexer {
    embedder: Arc<dyn EmbeddingProvider>,
    model: String,
    similarity_floor: f32,
    batch_size: usize,
}

impl InMemoryIndexer {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, model: impl Into<String>) -> Self {
        Self {
            embedder,
            model: model.into(),
            similarity_floor: 0.0,
            batch_size: 100,
        }
    }

    pub fn with_similarity_floor(mut self, floor: f32) -> Self {
        self.similarity_floor = floor;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

#[async_trait]
impl VectorStoreIndexer for InMemoryIndexer {
    async fn index_passages(
        &self,
        collection_id: &str,
        passages: Vec<Passage>,
    ) -> Result<Arc<dyn VectorStore>, DomainError> {
        let mut vectors = Vec::with_capacity(passages.len());

        for batch in passages.chunks(self.batch_size) {
            let texts = batch.iter().map(|p| p.content().to_string()).collect();
            let response = self
                .embedder
                .embed(EmbeddingRequest::batch(&self.model, texts))
                .await?;

            if response.len() != batch.len() {
                return Err(DomainError::vector_store(format!(
                    "Expected {} embeddings, received {}",
                    batch.len(),
                    response.len()
                )));
            }

            vectors.extend(response.into_vectors());
        }

        let entries = passages
            .into_iter()
            .zip(vectors)
            .map(|(passage, vector)| IndexedPassage { passage, vector })
            .collect::<Vec<_>>();

        debug!(
            collection_id,
            passages = entries.len(),
            "Indexed collection"
        );

        Ok(Arc::new(InMemoryVectorStore {
            collection_id: collection_id.to_string(),
            embedder: self.embedder.clone(),
            model: self.model.clone(),
            similarity_floor: self.similarity_floor,
            entries,
        }))
    }
}
