//! Domain layer - Core business logic and entities

pub mod embedding;
pub mod error;
pub mod extraction;
pub mod ingestion;
pub mod llm;
pub mod parsing;
pub mod prompt;
pub mod review;
pub mod vector_store;

pub use embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
pub use error::DomainError;
pub use extraction::{ExtractionRecord, ExtractionSchema, FieldDescriptor, FieldType};
pub use ingestion::{ChunkingConfig, ChunkingStrategy, ChunkingType, Passage, PassageMetadata};
pub use llm::{ChatModel, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use parsing::{parse_answer, parse_record, ParsedAnswer, ParsedRecord};
pub use review::{extraction_gate, qa_gate, GateConfig, GateDecision, ReviewReason};
pub use vector_store::{VectorStore, VectorStoreIndexer};
