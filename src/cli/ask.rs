//! Ask command - ingest documents and answer a question

use std::path::PathBuf;

use clap::Args;

use super::{bootstrap, ingest, print_json};
use crate::create_app_state;
use crate::infrastructure::services::QaOptions;

#[derive(Args, Clone, Debug)]
pub struct AskArgs {
    /// Question to answer
    pub question: String,

    /// Documents to ingest (.txt, .md or .pdf)
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Passages to retrieve (overrides config)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Minimum confidence to skip review (overrides config)
    #[arg(long)]
    pub confidence_threshold: Option<f64>,

    /// Minimum retrieved passages to skip review (overrides config)
    #[arg(long)]
    pub min_passages: Option<usize>,
}

pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let config = bootstrap()?;
    let state = create_app_state(&config)?;

    ingest(&state.ingestion, &args.files).await?;
    let store = state.registry.active_store().await?;

    let options = QaOptions {
        top_k: args.top_k,
        confidence_threshold: args.confidence_threshold,
        min_passages: args.min_passages,
    };
    let result = state.qa.run(store.as_ref(), &args.question, &options).await?;

    print_json(&result)
}
