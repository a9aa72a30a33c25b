use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1", env = "MINUTES_HOST")]
        host: String,

        #[arg(short, long, default_value = "8000", env = "MINUTES_PORT")]
        port: u16,
    },

    /// Generate minutes for a single notes file and print them as JSON
    Generate {
        /// Path to a text file with the raw notes, or `-` for stdin
        input: String,
    },
}

/// Read raw notes from a file path, or from stdin when `input` is `-`.
pub fn read_notes(input: &str) -> Result<String> {
    if input == "-" {
        let mut notes = String::new();
        std::io::stdin()
            .read_to_string(&mut notes)
            .context("failed to read notes from stdin")?;
        return Ok(notes);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).with_context(|| format!("failed to read notes from {}", path.display()))
}
