//! Extract command - ingest documents and extract a contract record

use std::path::PathBuf;

use clap::Args;

use super::{bootstrap, ingest, print_json};
use crate::create_app_state;
use crate::infrastructure::services::ExtractionOptions;

#[derive(Args, Clone, Debug)]
pub struct ExtractArgs {
    /// Documents to ingest (.txt, .md or .pdf)
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Retrieval query; defaults to the schema's field names
    #[arg(long)]
    pub query: Option<String>,

    /// Passages to retrieve (overrides config)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Add a short human-readable summary of the record
    #[arg(long)]
    pub summarize: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let config = bootstrap()?;
    let state = create_app_state(&config)?;

    ingest(&state.ingestion, &args.files).await?;
    let store = state.registry.active_store().await?;

    let pipeline = if args.summarize {
        state.extraction.as_ref().clone().with_summary()
    } else {
        state.extraction.as_ref().clone()
    };

    let options = ExtractionOptions {
        query: args.query,
        top_k: args.top_k,
    };
    let result = pipeline.run(store.as_ref(), &options).await?;

    print_json(&result)
}
