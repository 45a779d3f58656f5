use clap::Parser;
use rag_review::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chunk(args) => cli::chunk::run(args).await,
        Command::Ask(args) => cli::ask::run(args).await,
        Command::Extract(args) => cli::extract::run(args).await,
    }
}
