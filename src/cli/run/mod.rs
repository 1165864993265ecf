//! Run command - validation phase followed by judging the real outputs

use tracing::info;

use super::CaseFileArgs;
use super::output::render_run;
use crate::domain::case::RunSummary;
use crate::infrastructure::services::ValidatedCasesRunner;

/// Run every case in the file; returns whether everything passed
pub async fn run(args: CaseFileArgs) -> anyhow::Result<bool> {
    let config = super::bootstrap()?;
    let cases = super::load_cases(&args.file).await?;
    let judge = super::build_judge(&config)?;

    let runner = ValidatedCasesRunner::new(cases, judge);
    let results = runner.run().await?;
    let summary = RunSummary::from_results(&results);

    println!("{}", render_run(&results, &summary, args.format)?);

    info!(
        "Run complete: {} passed, {} failed, {} with example disagreements",
        summary.passed, summary.failed, summary.validation_failures
    );

    Ok(summary.all_passed())
}
