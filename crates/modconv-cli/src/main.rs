//! modconv CLI
//!
//! Converts a header based C++ project to C++20 modules as described by a
//! YAML config file.

use anyhow::{Context, Result};
use clap::Parser;
use modconv_core::ConverterConfig;
use modconv_rewrite::convert;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modconv")]
#[command(author, version, about = "Convert C++ headers to C++20 modules", long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
}

fn load_config(path: &Path) -> Result<ConverterConfig> {
    ConverterConfig::load(path)
        .with_context(|| format!("failed to load config file {}", path.display()))
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    info!(
        "Converting {} in {} mode",
        config.root_dir.display(),
        config.mode
    );

    let report = convert(&config).context("failed to convert")?;
    if report.failed > 0 {
        info!("{} files could not be analysed, see the errors above", report.failed);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
