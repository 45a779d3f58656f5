//! Collection registry - holds the active collection

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::vector_store::VectorStore;
use crate::domain::DomainError;

/// Snapshot of the active collection
///
/// Holds its own `Arc` to the store, so it stays usable after a later
/// ingest replaces the active collection.
#[derive(Debug, Clone)]
pub struct ActiveCollection {
    pub collection_id: String,
    pub version: u64,
    pub store: Arc<dyn VectorStore>,
}

#[derive(Debug, Default)]
struct RegistryState {
    active: Option<ActiveCollection>,
    version: u64,
}

/// Registry of the collection that serves requests
///
/// Every ingest bumps a monotonically increasing version and replaces the
/// previous collection. The registry keeps no reference to a replaced
/// store; it is freed once the last in-flight reader drops its snapshot.
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    state: RwLock<RegistryState>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a collection the active one, returning its version
    pub async fn register_active(&self, store: Arc<dyn VectorStore>) -> u64 {
        let collection_id = store.collection_id().to_string();
        let mut state = self.state.write().await;

        state.version += 1;
        let version = state.version;
        let replaced = state.active.replace(ActiveCollection {
            collection_id: collection_id.clone(),
            version,
            store,
        });

        info!(
            collection_id = %collection_id,
            version,
            replaced = replaced.as_ref().map(|r| r.collection_id.as_str()),
            "Activated collection"
        );
        version
    }

    pub async fn active(&self) -> Option<ActiveCollection> {
        self.state.read().await.active.clone()
    }

    /// Store of the active collection, or not-found before any ingest
    pub async fn active_store(&self) -> Result<Arc<dyn VectorStore>, DomainError> {
        self.active()
            .await
            .map(|active| active.store)
            .ok_or_else(|| DomainError::not_found("No collection has been ingested"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingestion::Passage;
    use crate::domain::vector_store::MockVectorStore;

    fn store(id: &str, content: &str) -> Arc<dyn VectorStore> {
        Arc::new(
            MockVectorStore::new(vec![Passage::new(content, "doc.txt", 0)]).with_collection_id(id),
        )
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let registry = CollectionRegistry::new();

        assert!(registry.active().await.is_none());
        let err = registry.active_store().await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_last_ingest_wins() {
        let registry = CollectionRegistry::new();

        let v1 = registry.register_active(store("a", "first")).await;
        let v2 = registry.register_active(store("b", "second")).await;

        assert!(v2 > v1);
        let active = registry.active().await.unwrap();
        assert_eq!(active.collection_id, "b");
        assert_eq!(active.version, v2);
    }

    #[tokio::test]
    async fn test_replaced_collection_is_released() {
        let registry = CollectionRegistry::new();
        let first = store("a", "first");
        registry.register_active(first.clone()).await;
        assert_eq!(Arc::strong_count(&first), 2);

        for i in 0..50 {
            registry.register_active(store(&format!("c{}", i), "x")).await;
        }

        assert_eq!(Arc::strong_count(&first), 1);
        let active = registry.active().await.unwrap();
        assert_eq!(active.collection_id, "c49");
        assert_eq!(active.version, 51);
    }

    #[tokio::test]
    async fn test_snapshot_survives_activation() {
        let registry = CollectionRegistry::new();
        registry.register_active(store("a", "first")).await;

        let snapshot = registry.active_store().await.unwrap();
        registry.register_active(store("b", "second")).await;

        let results = snapshot.similarity_search("q", 4).await.unwrap();
        assert_eq!(snapshot.collection_id(), "a");
        assert_eq!(results[0].content(), "first");
    }

    #[tokio::test]
    async fn test_concurrent_registration() {
        let registry = Arc::new(CollectionRegistry::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .register_active(store(&format!("c{}", i), "x"))
                        .await
                })
            })
            .collect();

        let mut versions = Vec::new();
        for handle in handles {
            versions.push(handle.await.unwrap());
        }
        versions.sort_unstable();
        versions.dedup();

        assert_eq!(versions.len(), 8);
        assert_eq!(registry.active().await.unwrap().version, 8);
    }
}
