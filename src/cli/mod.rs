//! CLI module for rag-review
//!
//! Subcommands:
//! - `chunk`: split a file into passages
//! - `ask`: ingest files and answer a question
//! - `extract`: ingest files and extract a contract record

pub mod ask;
pub mod chunk;
pub mod extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::services::{
    IngestFile, IngestionOutcome, IngestionService, ProgressCallback,
};

/// rag-review - document Q&A and extraction with human-review gating
#[derive(Parser)]
#[command(name = "rag-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a document into passages and print them
    Chunk(chunk::ChunkArgs),

    /// Ingest documents and answer a question about them
    Ask(ask::AskArgs),

    /// Ingest documents and extract a structured record
    Extract(extract::ExtractArgs),
}

/// Load `.env` and configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    Ok(config)
}

/// Ingest the given files, reporting progress to the log
pub(crate) async fn ingest(
    service: &IngestionService,
    files: &[PathBuf],
) -> anyhow::Result<IngestionOutcome> {
    let files: Vec<IngestFile> = files.iter().map(IngestFile::new).collect();
    let progress: ProgressCallback<'_> = &|message: &str, fraction: f32| {
        info!(progress = fraction, "{}", message);
    };

    Ok(service.ingest_files(&files, Some(progress)).await?)
}

/// Write a value to stdout as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from([
            "rag-review",
            "ask",
            "What is the fee?",
            "--file",
            "a.txt",
            "--file",
            "b.md",
            "--top-k",
            "2",
        ])
        .unwrap();

        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.question, "What is the fee?");
                assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.md")]);
                assert_eq!(args.top_k, Some(2));
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "rag-review",
            "extract",
            "--file",
            "contract.txt",
            "--summarize",
        ])
        .unwrap();

        match cli.command {
            Command::Extract(args) => {
                assert!(args.summarize);
                assert!(args.query.is_none());
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_parse_chunk() {
        let cli = Cli::try_parse_from([
            "rag-review",
            "chunk",
            "notes.md",
            "--strategy",
            "by_paragraph",
            "--chunk-size",
            "200",
        ])
        .unwrap();

        match cli.command {
            Command::Chunk(args) => {
                assert_eq!(args.strategy.as_deref(), Some("by_paragraph"));
                assert_eq!(args.chunk_size, Some(200));
                assert_eq!(args.chunk_overlap, None);
            }
            _ => panic!("expected chunk"),
        }
    }

    #[test]
    fn test_ask_requires_file() {
        assert!(Cli::try_parse_from(["rag-review", "ask", "question"]).is_err());
    }
}
