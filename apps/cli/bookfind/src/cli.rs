//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bookfind",
    about = "Search the Google Books catalog from the terminal",
    version
)]
pub struct Cli {
    /// Search term; starts an interactive prompt when omitted.
    pub query: Vec<String>,

    /// Override the configured number of results per search (1-40).
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Override the configured language restriction code (ISO 639-1).
    #[arg(long)]
    pub lang: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir).
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Output results as JSON (for scripts).
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The positional words joined back into one query string.
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
