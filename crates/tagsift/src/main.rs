use anyhow::Result;
use clap::Parser;

use tagsift::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Extract {
            document,
            stop_words,
            output,
            json,
        } => tagsift::cli::extract::run(&document, &stop_words, output.as_deref(), json),
        Commands::Stopwords { file } => tagsift::cli::stopwords::run(&file),
    }
}
