//! Report rendering for the run and validate commands

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::case::{RunResult, RunSummary, ValidationResult};
use crate::domain::judge::Label;
use crate::infrastructure::services::ValidationReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct RunReport<'a> {
    results: &'a [RunResult],
    summary: &'a RunSummary,
}

pub fn render_run(
    results: &[RunResult],
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&RunReport { results, summary })?),
        OutputFormat::Text => {
            let mut out = String::new();

            for result in results {
                let label = Label::from_passed(result.is_success());
                writeln!(out, "[{}] {}", label, result.case_name)?;
                writeln!(out, "  output: {}", result.outcome.output)?;
                writeln!(
                    out,
                    "  verdict: {} - {}",
                    Label::from_passed(result.outcome.passed),
                    result.outcome.explanation
                )?;
                write_examples(&mut out, &result.validation)?;
            }

            write!(
                out,
                "{} case(s): {} passed, {} failed, {} with example disagreements",
                summary.total, summary.passed, summary.failed, summary.validation_failures
            )?;

            Ok(out)
        }
    }
}

pub fn render_validation(
    reports: &[ValidationReport],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            let mut out = String::new();

            for report in reports {
                let label = Label::from_passed(!report.validation.has_failure());
                writeln!(out, "[{}] {}", label, report.case_name)?;
                write_examples(&mut out, &report.validation)?;
            }

            let disagreeing = reports
                .iter()
                .filter(|r| r.validation.has_failure())
                .count();
            write!(
                out,
                "{} case(s) validated, {} with example disagreements",
                reports.len(),
                disagreeing
            )?;

            Ok(out)
        }
    }
}

fn write_examples(out: &mut String, validation: &ValidationResult) -> std::fmt::Result {
    writeln!(
        out,
        "  examples: {} checked, {} disagreed",
        validation.examples().len(),
        validation.failure_count()
    )?;

    for failure in validation.failures() {
        writeln!(
            out,
            "    expected {}: {:?} - {}",
            failure.expected, failure.text, failure.explanation
        )?;
    }

    Ok(())
}
