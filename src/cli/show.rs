//! Show command - prints one algorithm from a definitions file

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::{catalog, logging};

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the JSON definitions file
    pub file: PathBuf,

    /// Name of the algorithm to print
    pub name: String,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let catalog = catalog::load_file(&args.file)?;

    let algorithm = catalog.get(&args.name).with_context(|| {
        format!(
            "no algorithm named '{}' in {}",
            args.name,
            args.file.display()
        )
    })?;

    println!("{}", serde_json::to_string_pretty(algorithm)?);

    Ok(())
}
