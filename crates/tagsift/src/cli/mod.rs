pub mod extract;
pub mod stopwords;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tgsft",
    about = "Stop-word filtered tag extraction for text files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract tags from a document and print the frequency table
    Extract {
        /// Document to extract from
        document: PathBuf,
        /// Stop-word list, one word per line
        #[arg(short = 's', long = "stop-words")]
        stop_words: PathBuf,
        /// Also save the table to this file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
        /// Print the table as JSON instead of `token: count` lines
        #[arg(long)]
        json: bool,
    },
    /// Inspect a stop-word list
    Stopwords {
        /// Stop-word list file
        file: PathBuf,
    },
}
