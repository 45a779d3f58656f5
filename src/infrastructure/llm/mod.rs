//! LLM provider implementations

mod azure_openai;
mod chat_wire;
mod factory;
mod http_client;
mod openai;

pub use azure_openai::{AzureOpenAiConfig, AzureOpenAiProvider};
pub use factory::{LlmProviderFactory, AZURE_OPENAI_API_KEY_VAR, OPENAI_API_KEY_VAR};
pub(crate) use factory::require_key;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::{OpenAiProvider, DEFAULT_OPENAI_BASE_URL};

#[cfg(test)]
pub(crate) use http_client::mock::MockHttpClient;
