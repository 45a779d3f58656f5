//! Application services: ingestion, retrieval and the two gated pipelines

mod extraction_service;
mod ingestion_service;
mod qa_service;
mod retrieval_service;

pub use extraction_service::{
    ExtractionOptions, ExtractionPipeline, ExtractionResult, ExtractionStage, ExtractionState,
    NO_DATA_SUMMARY,
};
pub use ingestion_service::{IngestFile, IngestionOutcome, IngestionService, ProgressCallback};
pub use qa_service::{QaOptions, QaPipeline, QaResult};
pub use retrieval_service::{Retriever, DEFAULT_TOP_K};
