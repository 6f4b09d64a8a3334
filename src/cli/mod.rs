//! CLI module for insilico-aws
//!
//! Provides subcommands for working with algorithm definition files:
//! - `validate`: check a definitions file and report each algorithm
//! - `show`: print one algorithm from a definitions file as JSON

pub mod show;
pub mod validate;

use clap::{Parser, Subcommand};

/// InSilico AWS - typed deployment resource definitions for ML workloads
#[derive(Parser)]
#[command(name = "insilico-aws")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an algorithm definitions file
    Validate(validate::ValidateArgs),

    /// Print one algorithm from a definitions file as JSON
    Show(show::ShowArgs),
}
