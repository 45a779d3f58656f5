//! Question answering over a collection, gated for human review

use serde::Serialize;
use tracing::{debug, info};

use super::retrieval_service::Retriever;
use crate::domain::ingestion::Passage;
use crate::domain::parsing::parse_answer;
use crate::domain::prompt::{format_context, qa_prompt, QA_SYSTEM};
use crate::domain::review::{qa_gate, GateConfig, GateDecision};
use crate::domain::vector_store::VectorStore;
use crate::domain::{ChatModel, DomainError};

/// Per-request overrides; unset values fall back to the pipeline's settings
#[derive(Debug, Clone, Default)]
pub struct QaOptions {
    pub top_k: Option<usize>,
    pub confidence_threshold: Option<f64>,
    pub min_passages: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaResult {
    pub answer: String,
    pub confidence: Option<f64>,
    pub sources: Vec<Passage>,
    #[serde(flatten)]
    pub decision: GateDecision,
}

/// Retrieve, ask the model, parse the answer, gate
#[derive(Debug, Clone)]
pub struct QaPipeline {
    chat: ChatModel,
    retriever: Retriever,
    gate: GateConfig,
}

impl QaPipeline {
    pub fn new(chat: ChatModel, retriever: Retriever) -> Self {
        Self {
            chat,
            retriever,
            gate: GateConfig::default(),
        }
    }

    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    pub async fn run(
        &self,
        store: &dyn VectorStore,
        question: &str,
        options: &QaOptions,
    ) -> Result<QaResult, DomainError> {
        let passages = self.retriever.retrieve(store, question, options.top_k).await?;

        let user = qa_prompt(&format_context(&passages), question)?;
        let reply = self.chat.complete(QA_SYSTEM, &user).await?;
        let parsed = parse_answer(&reply);

        debug!(
            confidence = ?parsed.confidence,
            answer_len = parsed.answer.len(),
            "Parsed QA reply"
        );

        let decision = qa_gate(
            &parsed.answer,
            parsed.confidence,
            passages.len(),
            options
                .confidence_threshold
                .unwrap_or(self.gate.confidence_threshold),
            options.min_passages.unwrap_or(self.gate.min_passages),
        );

        info!(
            collection_id = store.collection_id(),
            model = self.chat.model(),
            passages = passages.len(),
            confidence = ?parsed.confidence,
            needs_review = decision.needs_review(),
            reason = %decision.reason(),
            "QA run complete"
        );

        Ok(QaResult {
            answer: parsed.answer,
            confidence: parsed.confidence,
            sources: passages,
            decision,
        })
    }
}
