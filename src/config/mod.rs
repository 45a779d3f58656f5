//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ChunkingSettings, EmbeddingConfig, LlmConfig, LlmProviderKind, LogFormat,
    LoggingConfig, RetrievalConfig,
};
