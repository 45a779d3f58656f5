//! Chat-completions wire format shared by OpenAI and Azure OpenAI

use serde::{Deserialize, Serialize};

use crate::domain::llm::{FinishReason, Usage};
use crate::domain::{DomainError, LlmRequest, LlmResponse, Message};

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> WireMessage<'a> {
    fn from_domain(message: &'a Message) -> Self {
        Self {
            role: message.role().as_str(),
            content: message.content(),
        }
    }
}

/// Request body without the model field
pub(super) fn build_body(request: &LlmRequest) -> serde_json::Value {
    let messages: Vec<WireMessage<'_>> =
        request.messages.iter().map(WireMessage::from_domain).collect();

    let mut body = serde_json::json!({
        "messages": messages,
        "stream": false,
    });

    if let Some(temp) = request.temperature {
        body["temperature"] = serde_json::json!(temp);
    }

    if let Some(max_tokens) = request.max_tokens {
        body["max_tokens"] = serde_json::json!(max_tokens);
    }

    body
}

pub(super) fn parse_response(
    provider: &str,
    json: serde_json::Value,
    fallback_model: &str,
) -> Result<LlmResponse, DomainError> {
    let response: WireResponse = serde_json::from_value(json).map_err(|e| {
        DomainError::provider(provider, format!("Failed to parse response: {}", e))
    })?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::provider(provider, "No choices in response"))?;

    let model = response.model.unwrap_or_else(|| fallback_model.to_string());
    let mut llm_response =
        LlmResponse::new(response.id, model, choice.message.content.unwrap_or_default());

    if let Some(reason) = choice.finish_reason {
        llm_response = llm_response.with_finish_reason(FinishReason::from_wire(&reason));
    }

    if let Some(usage) = response.usage {
        llm_response = llm_response.with_usage(Usage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        });
    }

    Ok(llm_response)
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    id: String,
    model: Option<String>,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
