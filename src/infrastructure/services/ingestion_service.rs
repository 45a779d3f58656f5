//! Document ingestion: load, chunk, index and activate a collection

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ingestion::{ChunkingConfig, ChunkingType, Passage, SourceDocument};
use crate::domain::vector_store::VectorStoreIndexer;
use crate::domain::DomainError;
use crate::infrastructure::ingestion::{load_document, ChunkerFactory};
use crate::infrastructure::vector_store::CollectionRegistry;

/// Progress reporter, called with a message and a fraction in `[0, 1]`
pub type ProgressCallback<'a> = &'a (dyn Fn(&str, f32) + Send + Sync);

/// A file to ingest
#[derive(Debug, Clone)]
pub struct IngestFile {
    pub path: PathBuf,
    pub display_name: Option<String>,
}

impl IngestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Result of a successful ingest
#[derive(Debug, Clone, Serialize)]
pub struct IngestionOutcome {
    pub collection_id: String,
    pub version: u64,
    pub document_count: usize,
    pub passage_count: usize,
}

/// Chunks documents and registers them as the active collection
#[derive(Debug)]
pub struct IngestionService {
    indexer: Arc<dyn VectorStoreIndexer>,
    registry: Arc<CollectionRegistry>,
    chunking_type: ChunkingType,
    chunking: ChunkingConfig,
}

impl IngestionService {
    pub fn new(indexer: Arc<dyn VectorStoreIndexer>, registry: Arc<CollectionRegistry>) -> Self {
        Self {
            indexer,
            registry,
            chunking_type: ChunkingType::default(),
            chunking: ChunkingConfig::default(),
        }
    }

    pub fn with_chunking(mut self, chunking_type: ChunkingType, config: ChunkingConfig) -> Self {
        self.chunking_type = chunking_type;
        self.chunking = config;
        self
    }

    pub fn registry(&self) -> &Arc<CollectionRegistry> {
        &self.registry
    }

    /// Load and ingest files
    pub async fn ingest_files(
        &self,
        files: &[IngestFile],
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<IngestionOutcome, DomainError> {
        self.chunking_type.validate_config(&self.chunking)?;

        let total = files.len().max(1) as f32;
        let mut passages = Vec::new();

        for (i, file) in files.iter().enumerate() {
            let label = file
                .display_name
                .clone()
                .or_else(|| file.path.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| file.path.display().to_string());

            report(progress, &format!("Loading {}…", label), i as f32 / total);
            let document = load_document(&file.path, file.display_name.as_deref()).await?;

            report(progress, &format!("Chunking {}…", label), (i as f32 + 0.5) / total);
            passages.extend(self.chunk_document(&document)?);
        }

        self.index(passages, files.len(), progress).await
    }

    /// Ingest documents already in memory
    pub async fn ingest_documents(
        &self,
        documents: &[SourceDocument],
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<IngestionOutcome, DomainError> {
        self.chunking_type.validate_config(&self.chunking)?;

        let total = documents.len().max(1) as f32;
        let mut passages = Vec::new();

        for (i, document) in documents.iter().enumerate() {
            report(progress, &format!("Chunking {}…", document.name), i as f32 / total);
            passages.extend(self.chunk_document(document)?);
        }

        self.index(passages, documents.len(), progress).await
    }

    fn chunk_document(&self, document: &SourceDocument) -> Result<Vec<Passage>, DomainError> {
        let chunks = ChunkerFactory::create(self.chunking_type).chunk(&document.text, &self.chunking)?;

        debug!(
            source = %document.name,
            strategy = %self.chunking_type,
            chunks = chunks.len(),
            "Chunked document"
        );

        Ok(Passage::from_chunks(&document.name, chunks))
    }

    async fn index(
        &self,
        passages: Vec<Passage>,
        document_count: usize,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<IngestionOutcome, DomainError> {
        if passages.is_empty() {
            return Err(DomainError::validation(
                "No chunks produced from the given documents.",
            ));
        }

        let passage_count = passages.len();
        let collection_id = Uuid::new_v4().to_string();

        report(progress, "Embedding and indexing passages…", 0.85);
        let store = self.indexer.index_passages(&collection_id, passages).await?;
        let version = self.registry.register_active(store).await;
        report(progress, "Done.", 1.0);

        info!(
            collection_id = %collection_id,
            version,
            document_count,
            passage_count,
            "Ingestion complete"
        );

        Ok(IngestionOutcome {
            collection_id,
            version,
            document_count,
            passage_count,
        })
    }
}

fn report(progress: Option<ProgressCallback<'_>>, message: &str, fraction: f32) {
    if let Some(callback) = progress {
        callback(message, fraction);
    }
}
