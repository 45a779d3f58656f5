//! Chat model bound to a provider, model name and sampling settings

use std::sync::Arc;

use tracing::{debug, warn};

use super::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

/// A provider bound to one model and sampling temperature
///
/// Every pipeline call is a single system + user turn.
#[derive(Debug, Clone)]
pub struct ChatModel {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl ChatModel {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Send one system and one user message and return the reply text
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let mut builder = LlmRequest::builder()
            .system(system)
            .user(user)
            .temperature(self.temperature);
        if let Some(max_tokens) = self.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        let response = self.provider.chat(&self.model, builder.build()).await?;

        if response.is_incomplete() {
            warn!(
                model = %self.model,
                finish_reason = ?response.finish_reason,
                "LLM reply was cut short"
            );
        }

        debug!(
            provider = self.provider.provider_name(),
            model = %self.model,
            reply_len = response.content().len(),
            total_tokens = response.usage.map(|u| u.total()),
            "LLM completion received"
        );

        Ok(response.content().to_string())
    }
}
