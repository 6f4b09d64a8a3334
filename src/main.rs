use clap::Parser;
use insilico_aws::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => cli::validate::run(args),
        Command::Show(args) => cli::show::run(args),
    }
}
