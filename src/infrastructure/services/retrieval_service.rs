//! Top-k passage retrieval

use tracing::debug;

use crate::domain::ingestion::Passage;
use crate::domain::vector_store::VectorStore;
use crate::domain::DomainError;

pub const DEFAULT_TOP_K: usize = 4;

/// Queries a store for the passages most relevant to a query
#[derive(Debug, Clone, Copy)]
pub struct Retriever {
    default_top_k: usize,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl Retriever {
    pub fn new(default_top_k: usize) -> Self {
        Self { default_top_k }
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    /// Return at most `top_k` passages, most relevant first
    ///
    /// An empty store yields an empty list. Store failures propagate
    /// unchanged.
    pub async fn retrieve(
        &self,
        store: &dyn VectorStore,
        query: &str,
        top_k: Option<usize>,
    ) -> Result<Vec<Passage>, DomainError> {
        let top_k = top_k.unwrap_or(self.default_top_k);

        let mut passages = store.similarity_search(query, top_k).await?;
        passages.truncate(top_k);

        debug!(
            collection_id = store.collection_id(),
            store = store.provider_type(),
            top_k,
            retrieved = passages.len(),
            "Retrieved passages"
        );

        Ok(passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vector_store::MockVectorStore;

    fn passages(n: usize) -> Vec<Passage> {
        (0..n)
            .map(|i| Passage::new(format!("passage {}", i), "doc.txt", i))
            .collect()
    }

    #[tokio::test]
    async fn test_passes_query_and_top_k_through() {
        let store = MockVectorStore::new(passages(10));
        let retriever = Retriever::default();

        let results = retriever.retrieve(&store, "rent amount", None).await.unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].content(), "passage 0");
        assert_eq!(store.last_query().as_deref(), Some("rent amount"));
        assert_eq!(store.search_count(), 1);
    }

    #[tokio::test]
    async fn test_truncates_misbehaving_store() {
        let store = MockVectorStore::new(passages(10)).ignoring_top_k();
        let results = Retriever::new(4).retrieve(&store, "q", Some(2)).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MockVectorStore::new(Vec::new());
        let results = Retriever::default().retrieve(&store, "q", None).await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MockVectorStore::new(passages(3)).with_error("connection reset");
        let err = Retriever::default().retrieve(&store, "q", None).await.unwrap_err();

        assert!(matches!(err, DomainError::VectorStore(_)));
    }
}
