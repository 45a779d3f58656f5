//! Infrastructure layer - provider clients, storage and services

pub mod embedding;
pub mod ingestion;
pub mod llm;
pub mod logging;
pub mod services;
pub mod vector_store;
