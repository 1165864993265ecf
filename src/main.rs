use std::process::ExitCode;

use clap::Parser;
use validated_ai_tests::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let succeeded = match cli.command {
        Command::Run(args) => cli::run::run(args).await?,
        Command::Validate(args) => cli::validate::run(args).await?,
        Command::Prompt(args) => cli::prompt::run(args).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
