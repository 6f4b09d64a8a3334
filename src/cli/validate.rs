//! Validate command - checks an algorithm definitions file

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::{catalog, logging};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the JSON definitions file
    pub file: PathBuf,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let catalog = catalog::load_file(&args.file)?;

    for algorithm in catalog.list() {
        info!(
            name = algorithm.name(),
            region = algorithm.region_name(),
            training_instances = algorithm.training_instance_type().len(),
            inference_instances = algorithm.inference_instance_type().len(),
            "Valid algorithm definition"
        );
    }

    println!(
        "{}: {} algorithm definition(s) valid",
        args.file.display(),
        catalog.len()
    );

    Ok(())
}
