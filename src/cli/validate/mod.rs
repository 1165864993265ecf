//! Validate command - checks example strings only

use super::CaseFileArgs;
use super::output::render_validation;
use crate::infrastructure::services::ValidatedCasesRunner;

/// Validate every case in the file; returns whether all examples behaved
pub async fn run(args: CaseFileArgs) -> anyhow::Result<bool> {
    let config = super::bootstrap()?;
    let cases = super::load_cases(&args.file).await?;
    let judge = super::build_judge(&config)?;

    let runner = ValidatedCasesRunner::new(cases, judge);
    let reports = runner.validate_all().await?;

    println!("{}", render_validation(&reports, args.format)?);

    Ok(reports.iter().all(|r| !r.validation.has_failure()))
}
