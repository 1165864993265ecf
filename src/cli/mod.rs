//! CLI module for validated-ai-tests
//!
//! Provides subcommands operating on a TOML case file:
//! - `run`: validate the examples, then judge each executor's output
//! - `validate`: validate the examples only
//! - `prompt`: print the judge prompt of each case (no network)

pub mod output;
pub mod prompt;
pub mod run;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::case::Case;
use crate::domain::llm::LlmProvider;
use crate::infrastructure::case_file::CaseFile;
use crate::infrastructure::judge::LlmJudge;
use crate::infrastructure::llm::LlmProviderFactory;
use crate::infrastructure::logging;
use output::OutputFormat;

/// validated-ai-tests - LLM-judged tests with validated examples
#[derive(Parser)]
#[command(name = "validated-ai-tests")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate examples, then judge each executor's output
    Run(CaseFileArgs),

    /// Only check the example strings against their conditions
    Validate(CaseFileArgs),

    /// Print the judge prompt prefix of each case
    Prompt(PromptArgs),
}

#[derive(Debug, Args)]
pub struct CaseFileArgs {
    /// Path to the TOML case file
    pub file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Path to the TOML case file
    pub file: PathBuf,
}

/// Load `.env`, configuration, and install logging
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init_logging(&config.logging);

    Ok(config)
}

fn build_judge(config: &AppConfig) -> anyhow::Result<Arc<LlmJudge<dyn LlmProvider>>> {
    let provider = LlmProviderFactory::create(&config.judge)?;
    Ok(Arc::new(LlmJudge::new(provider, config.judge.model.clone())))
}

async fn load_cases(path: &Path) -> anyhow::Result<Vec<Case>> {
    let cases = CaseFile::load(path)
        .await?
        .into_cases()
        .with_context(|| format!("invalid case in {}", path.display()))?;

    tracing::info!("Loaded {} case(s) from {}", cases.len(), path.display());
    Ok(cases)
}
