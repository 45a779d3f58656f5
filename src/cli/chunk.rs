//! Chunk command - split one file into passages

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::{bootstrap, print_json};
use crate::domain::ingestion::{ChunkingType, Passage};
use crate::infrastructure::ingestion::{load_document, ChunkerFactory};

#[derive(Args, Clone, Debug)]
pub struct ChunkArgs {
    /// File to chunk (.txt, .md or .pdf)
    pub file: PathBuf,

    /// Chunking strategy: fixed_overlap or by_paragraph (overrides config)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Maximum passage size in characters (overrides config)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between fixed_overlap windows (overrides config)
    #[arg(long)]
    pub chunk_overlap: Option<usize>,
}

pub async fn run(args: ChunkArgs) -> anyhow::Result<()> {
    let config = bootstrap()?;

    let strategy: ChunkingType = match &args.strategy {
        Some(name) => name.parse()?,
        None => config.chunking.strategy,
    };

    let mut chunking = config.chunking.to_chunking_config();
    if let Some(size) = args.chunk_size {
        chunking.chunk_size = size;
    }
    if let Some(overlap) = args.chunk_overlap {
        chunking.chunk_overlap = overlap;
    }
    strategy.validate_config(&chunking)?;

    let document = load_document(&args.file, None).await?;
    let chunks = ChunkerFactory::create(strategy).chunk(&document.text, &chunking)?;

    info!(
        source = %document.name,
        strategy = %strategy,
        passages = chunks.len(),
        "Chunked document"
    );

    print_json(&Passage::from_chunks(&document.name, chunks))
}
