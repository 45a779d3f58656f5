//! Retrieval-augmented document Q&A and extraction with human-review gating
//!
//! Documents are chunked into passages and indexed into a collection. The
//! QA and extraction pipelines retrieve from the active collection, ask a
//! chat model, parse its reply and decide whether a human has to review
//! the result.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::extraction::ExtractionSchema;
use domain::{ChatModel, EmbeddingProvider, LlmProvider};
use infrastructure::embedding::EmbeddingProviderFactory;
use infrastructure::llm::LlmProviderFactory;
use infrastructure::services::{ExtractionPipeline, IngestionService, QaPipeline, Retriever};
use infrastructure::vector_store::CollectionRegistry;

/// Services wired from configuration
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<CollectionRegistry>,
    pub ingestion: Arc<IngestionService>,
    pub qa: Arc<QaPipeline>,
    pub extraction: Arc<ExtractionPipeline>,
}

/// Build the application state with providers created from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let llm = LlmProviderFactory::create(&config.llm)?;
    let embedder = EmbeddingProviderFactory::create(&config.embedding)?;

    Ok(create_app_state_with_providers(config, llm, embedder))
}

/// Build the application state around existing providers
pub fn create_app_state_with_providers(
    config: &AppConfig,
    llm: Arc<dyn LlmProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
) -> AppState {
    let registry = Arc::new(CollectionRegistry::new());
    let indexer = Arc::new(EmbeddingProviderFactory::indexer(&config.embedding, embedder));

    let ingestion = IngestionService::new(indexer, registry.clone()).with_chunking(
        config.chunking.strategy,
        config.chunking.to_chunking_config(),
    );

    let chat = ChatModel::new(llm, &config.llm.model)
        .with_temperature(config.llm.temperature)
        .with_max_tokens(config.llm.max_tokens);
    let retriever = Retriever::new(config.retrieval.top_k);

    let qa = QaPipeline::new(chat.clone(), retriever).with_gate(config.gate);
    let extraction = ExtractionPipeline::new(chat, retriever, ExtractionSchema::contract());

    AppState {
        registry,
        ingestion: Arc::new(ingestion),
        qa: Arc::new(qa),
        extraction: Arc::new(extraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::embedding::MockEmbeddingProvider;
    use domain::ingestion::SourceDocument;
    use domain::llm::MockLlmProvider;
    use domain::ReviewReason;
    use infrastructure::services::{ExtractionOptions, QaOptions};

    fn state(llm: Arc<MockLlmProvider>) -> AppState {
        create_app_state_with_providers(
            &AppConfig::default(),
            llm,
            Arc::new(MockEmbeddingProvider::new(64)),
        )
    }

    #[tokio::test]
    async fn test_ingest_then_ask() {
        let llm = Arc::new(
            MockLlmProvider::new("mock")
                .with_reply("The term is 12 months.\nConfidence: 0.92"),
        );
        let state = state(llm);

        let outcome = state
            .ingestion
            .ingest_documents(
                &[SourceDocument::new(
                    "lease.txt",
                    "The lease term is 12 months.\n\nRent is due monthly.",
                )],
                None,
            )
            .await
            .unwrap();

        let active = state.registry.active().await.unwrap();
        assert_eq!(active.collection_id, outcome.collection_id);

        let result = state
            .qa
            .run(active.store.as_ref(), "How long is the lease?", &QaOptions::default())
            .await
            .unwrap();

        assert_eq!(result.answer, "The term is 12 months.");
        assert_eq!(result.confidence, Some(0.92));
        assert!(!result.decision.needs_review());
    }

    #[tokio::test]
    async fn test_ingest_then_extract() {
        let llm = Arc::new(MockLlmProvider::new("mock").with_reply(
            r#"{"dates": "2024-03-01", "parties": "Acme; Beta", "amounts": null, "uncertain_fields": ["amounts"]}"#,
        ));
        let state = state(llm);

        state
            .ingestion
            .ingest_documents(
                &[SourceDocument::new("contract.md", "Signed 2024-03-01 by Acme and Beta.")],
                None,
            )
            .await
            .unwrap();

        let store = state.registry.active_store().await.unwrap();
        let result = state
            .extraction
            .run(store.as_ref(), &ExtractionOptions::default())
            .await
            .unwrap();

        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.decision.reason(), ReviewReason::UncertainFields);
    }

    #[tokio::test]
    async fn test_nothing_ingested() {
        let state = state(Arc::new(MockLlmProvider::new("mock")));
        let err = state.registry.active_store().await.unwrap_err();
        assert!(err.to_string().contains("No collection has been ingested"));
    }
}
