//! Application configuration loaded from files and environment

use serde::Deserialize;

use crate::domain::{ChunkingConfig, ChunkingType, GateConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalConfig,
    pub gate: GateConfig,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Ingest-time chunking
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub strategy: ChunkingType,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub separators: Option<Vec<String>>,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        let defaults = ChunkingConfig::default();
        Self {
            strategy: ChunkingType::default(),
            chunk_size: defaults.chunk_size,
            chunk_overlap: defaults.chunk_overlap,
            separators: None,
        }
    }
}

impl ChunkingSettings {
    pub fn to_chunking_config(&self) -> ChunkingConfig {
        let config = ChunkingConfig::new(self.chunk_size, self.chunk_overlap);
        match &self.separators {
            Some(separators) => config.with_separators(separators.iter().cloned()),
            None => config,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 4 }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    #[default]
    OpenAi,
    Azure,
}

/// Chat model settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    /// Model name, or deployment name for Azure
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::default(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            max_tokens: None,
            base_url: None,
            azure_endpoint: None,
            azure_api_version: "2024-02-01".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Embedding settings for the in-memory vector store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
    pub base_url: Option<String>,
    /// Passages scoring below this cosine similarity are never returned
    pub similarity_floor: f32,
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-small".to_string(),
            base_url: None,
            similarity_floor: 0.0,
            batch_size: 100,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder().build()?.try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
    }
}
