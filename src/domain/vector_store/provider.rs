//! Vector store and indexer traits

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::domain::ingestion::Passage;
use crate::domain::DomainError;

/// A searchable passage collection
#[async_trait]
pub trait VectorStore: Send + Sync + Debug {
    /// Identifier of the collection this store serves
    fn collection_id(&self) -> &str;

    /// Backend name, used in logs
    fn provider_type(&self) -> &'static str;

    /// Return up to `top_k` passages, most similar first
    async fn similarity_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<Passage>, DomainError>;

    /// Number of passages in the collection
    fn passage_count(&self) -> usize;
}

/// Builds a searchable collection from passages
#[async_trait]
pub trait VectorStoreIndexer: Send + Sync + Debug {
    async fn index_passages(
        &self,
        collection_id: &str,
        passages: Vec<Passage>,
    ) -> Result<Arc<dyn VectorStore>, DomainError>;
}
