use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cbe")]
#[command(about = "Frame or unframe one blob with Composable Binary Encoding")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a file (or stdin) as one blob on stdout
    Encode {
        /// Input file, stdin when absent
        input: Option<PathBuf>,

        /// Chunk size in bytes for streaming writes
        #[arg(short, long)]
        chunk_len: Option<usize>,
    },

    /// Decode one blob from a file (or stdin) to stdout
    Decode {
        /// Input file, stdin when absent
        input: Option<PathBuf>,
    },
}
