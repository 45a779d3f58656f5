//! Structured extraction as an ordered list of stages
//!
//! Retrieve, extract, validate, gate and optionally summarize. Each stage
//! reads and extends one `ExtractionState`.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::retrieval_service::Retriever;
use crate::domain::extraction::{validate_record, ExtractionRecord, ExtractionSchema};
use crate::domain::ingestion::Passage;
use crate::domain::parsing::parse_record;
use crate::domain::prompt::{
    extraction_prompt, format_context, summary_prompt, EXTRACTION_SYSTEM, SUMMARY_SYSTEM,
};
use crate::domain::review::{extraction_gate, GateDecision};
use crate::domain::vector_store::VectorStore;
use crate::domain::{ChatModel, DomainError};

pub const NO_DATA_SUMMARY: &str = "No data extracted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    Retrieve,
    Extract,
    Validate,
    Gate,
    Summarize,
}

impl ExtractionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieve => "retrieve",
            Self::Extract => "extract",
            Self::Validate => "validate",
            Self::Gate => "gate",
            Self::Summarize => "summarize",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionOptions {
    /// Retrieval query; the schema's field names when unset
    pub query: Option<String>,
    pub top_k: Option<usize>,
}

/// Accumulated output of the stages run so far
#[derive(Debug, Clone)]
pub struct ExtractionState {
    pub query: String,
    pub passages: Vec<Passage>,
    pub raw_reply: Option<String>,
    pub record: ExtractionRecord,
    pub uncertain_fields: Vec<String>,
    pub validation_errors: Vec<String>,
    pub decision: Option<GateDecision>,
    pub summary: Option<String>,
}

impl ExtractionState {
    fn new(query: String, schema: &ExtractionSchema) -> Self {
        Self {
            query,
            passages: Vec::new(),
            raw_reply: None,
            record: ExtractionRecord::empty(schema),
            uncertain_fields: Vec::new(),
            validation_errors: Vec::new(),
            decision: None,
            summary: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub record: ExtractionRecord,
    pub uncertain_fields: Vec<String>,
    pub validation_errors: Vec<String>,
    pub sources: Vec<Passage>,
    #[serde(flatten)]
    pub decision: GateDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl TryFrom<ExtractionState> for ExtractionResult {
    type Error = DomainError;

    fn try_from(state: ExtractionState) -> Result<Self, Self::Error> {
        let decision = state
            .decision
            .ok_or_else(|| DomainError::internal("Extraction finished without a review decision"))?;

        Ok(Self {
            record: state.record,
            uncertain_fields: state.uncertain_fields,
            validation_errors: state.validation_errors,
            sources: state.passages,
            decision,
            summary: state.summary,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    chat: ChatModel,
    retriever: Retriever,
    schema: ExtractionSchema,
    stages: Vec<ExtractionStage>,
}

impl ExtractionPipeline {
    pub fn new(chat: ChatModel, retriever: Retriever, schema: ExtractionSchema) -> Self {
        Self {
            chat,
            retriever,
            schema,
            stages: vec![
                ExtractionStage::Retrieve,
                ExtractionStage::Extract,
                ExtractionStage::Validate,
                ExtractionStage::Gate,
            ],
        }
    }

    /// Append the summary stage
    pub fn with_summary(mut self) -> Self {
        if !self.stages.contains(&ExtractionStage::Summarize) {
            self.stages.push(ExtractionStage::Summarize);
        }
        self
    }

    pub fn schema(&self) -> &ExtractionSchema {
        &self.schema
    }

    pub fn stages(&self) -> &[ExtractionStage] {
        &self.stages
    }

    pub async fn run(
        &self,
        store: &dyn VectorStore,
        options: &ExtractionOptions,
    ) -> Result<ExtractionResult, DomainError> {
        let query = options
            .query
            .clone()
            .filter(|q| !q.trim().is_empty())
            .unwrap_or_else(|| self.schema.default_query());
        let mut state = ExtractionState::new(query, &self.schema);

        for stage in &self.stages {
            debug!(stage = stage.as_str(), "Running extraction stage");
            self.run_stage(*stage, store, options, &mut state).await?;
        }

        let result = ExtractionResult::try_from(state)?;

        info!(
            collection_id = store.collection_id(),
            model = self.chat.model(),
            passages = result.sources.len(),
            uncertain_fields = result.uncertain_fields.len(),
            validation_errors = result.validation_errors.len(),
            needs_review = result.decision.needs_review(),
            reason = %result.decision.reason(),
            "Extraction run complete"
        );

        Ok(result)
    }

    async fn run_stage(
        &self,
        stage: ExtractionStage,
        store: &dyn VectorStore,
        options: &ExtractionOptions,
        state: &mut ExtractionState,
    ) -> Result<(), DomainError> {
        match stage {
            ExtractionStage::Retrieve => {
                state.passages = self
                    .retriever
                    .retrieve(store, &state.query, options.top_k)
                    .await?;
            }
            ExtractionStage::Extract => {
                let user = extraction_prompt(&format_context(&state.passages), &self.schema.describe())?;
                let reply = self.chat.complete(EXTRACTION_SYSTEM, &user).await?;
                let parsed = parse_record(&reply, &self.schema);

                if parsed.is_parse_error() {
                    warn!(reply_len = reply.len(), "Extraction reply could not be parsed");
                }

                state.raw_reply = Some(reply);
                state.record = parsed.record;
                state.uncertain_fields = parsed.uncertain_fields;
            }
            ExtractionStage::Validate => {
                state.validation_errors = validate_record(&state.record, &self.schema);
            }
            ExtractionStage::Gate => {
                state.decision = Some(extraction_gate(
                    &state.uncertain_fields,
                    &state.validation_errors,
                ));
            }
            ExtractionStage::Summarize => {
                state.summary = Some(self.summarize(&state.record).await?);
            }
        }

        Ok(())
    }

    async fn summarize(&self, record: &ExtractionRecord) -> Result<String, DomainError> {
        if record.is_all_null() {
            return Ok(NO_DATA_SUMMARY.to_string());
        }

        let user = summary_prompt(&record.display_lines())?;
        let reply = self.chat.complete(SUMMARY_SYSTEM, &user).await?;

        Ok(reply.trim().to_string())
    }
}
