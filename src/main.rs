// src/main.rs

mod cli;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use moviecatalog::application::{run_and_report, Scenario};

use crate::cli::Cli;

/// Initialize the logger; RUST_LOG overrides the default level
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let completed = run_and_report(&mut out, &Scenario::default(), cli.output_format())
        .context("failed to write demonstration output")?;
    out.flush().context("failed to flush stdout")?;

    info!("Demonstration finished (completed: {})", completed);
    Ok(())
}
