//! Command-line interface definitions

use clap::Parser;

use moviecatalog::application::OutputFormat;

/// Walk a movie and an actor through the catalog and print each step
#[derive(Parser, Debug)]
#[command(name = "moviecatalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print entities as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
