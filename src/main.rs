use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;

use cbe::{CbeError, Decoder, Encoder};

mod cli;
use crate::cli::{Cli, Commands};

fn main() -> Result<(), CbeError> {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = io::stdout().lock();

    match &cli.command {
        Commands::Encode { input, chunk_len } => {
            let mut encoder = Encoder::new(stdout);
            if let Some(len) = chunk_len {
                encoder.set_chunk_len(*len)?;
            }
            let mut reader = open_input(input.as_deref())?;
            encoder.write_blob(&mut reader)?;
            encoder.into_inner().flush()?;
        }
        Commands::Decode { input } => {
            let mut writer = stdout;
            let reader = open_input(input.as_deref())?;
            Decoder::new(reader).read_blob(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, CbeError> {
    Ok(match path {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    })
}
