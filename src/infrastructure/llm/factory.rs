//! Factory for creating LLM providers from configuration

use std::sync::Arc;
use std::time::Duration;

use super::azure_openai::{AzureOpenAiConfig, AzureOpenAiProvider};
use super::http_client::HttpClient;
use super::openai::OpenAiProvider;
use crate::config::{LlmConfig, LlmProviderKind};
use crate::domain::{DomainError, LlmProvider};

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const AZURE_OPENAI_API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the configured provider, reading its API key from the environment
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        Self::create_with_keys(config, |name| std::env::var(name).ok())
    }

    /// Create the configured provider with an explicit key lookup
    pub fn create_with_keys<F>(
        config: &LlmConfig,
        lookup: F,
    ) -> Result<Arc<dyn LlmProvider>, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

        match config.provider {
            LlmProviderKind::OpenAi => {
                let api_key = require_key(&lookup, OPENAI_API_KEY_VAR)?;
                let provider = match &config.base_url {
                    Some(base_url) => OpenAiProvider::with_base_url(http_client, api_key, base_url),
                    None => OpenAiProvider::new(http_client, api_key),
                };
                Ok(Arc::new(provider))
            }

            LlmProviderKind::Azure => {
                let api_key = require_key(&lookup, AZURE_OPENAI_API_KEY_VAR)?;
                let endpoint = config.azure_endpoint.as_deref().ok_or_else(|| {
                    DomainError::configuration("llm.azure_endpoint is required for the azure provider")
                })?;

                let azure_config = AzureOpenAiConfig::new(endpoint, api_key)
                    .with_api_version(&config.azure_api_version);

                Ok(Arc::new(AzureOpenAiProvider::new(http_client, azure_config)))
            }
        }
    }
}

pub(crate) fn require_key<F>(lookup: &F, name: &str) -> Result<String, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| DomainError::configuration(format!("{} is not set", name)))
}
