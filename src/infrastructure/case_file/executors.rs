//! Executors that can be declared from a case file

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tokio::process::Command;
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::case::{CaseInputs, Executor, value_text};

/// `{0}`, `{1}` for positional args, `{name}` for named args
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+|[A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Fill a template from case inputs
///
/// Fails when a placeholder names an argument the case does not supply.
pub fn render_template(template: &str, inputs: &CaseInputs) -> Result<String, DomainError> {
    let mut missing = None;

    let rendered = PLACEHOLDER_PATTERN.replace_all(template, |caps: &Captures<'_>| {
        let key = &caps[1];
        let value = match key.parse::<usize>() {
            Ok(index) => inputs.arg(index),
            Err(_) => inputs.kwarg(key),
        };

        match value {
            Some(value) => value_text(value),
            None => {
                missing.get_or_insert_with(|| key.to_string());
                String::new()
            }
        }
    });

    if let Some(key) = missing {
        return Err(DomainError::executor(format!(
            "template references unknown argument '{}'",
            key
        )));
    }

    Ok(rendered.into_owned())
}

/// Sync executor rendering `template` with the case inputs
pub fn template_executor(template: impl Into<String>) -> Executor {
    let template = template.into();
    Executor::try_from_fn(move |inputs| render_template(&template, inputs))
}

/// Async executor running an external program
///
/// The case's positional args are appended after `args`; the trimmed
/// stdout is the output. A non-zero exit status is an executor error.
pub fn command_executor(program: impl Into<String>, args: Vec<String>) -> Executor {
    let program = program.into();

    Executor::try_from_async_fn(move |inputs: CaseInputs| {
        let program = program.clone();
        let mut argv = args.clone();
        argv.extend(inputs.args.iter().map(value_text));

        async move {
            debug!("Spawning executor command {} {:?}", program, argv);

            let output = Command::new(&program)
                .args(&argv)
                .output()
                .await
                .map_err(|e| DomainError::executor(format!("failed to spawn '{}': {}", program, e)))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(DomainError::executor(format!(
                    "'{}' exited with {}: {}",
                    program,
                    output.status,
                    stderr.trim()
                )));
            }

            Ok::<String, DomainError>(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inputs() -> CaseInputs {
        CaseInputs::from_args([json!("restart"), json!(3)]).with_kwarg("app", "the app")
    }

    #[test]
    fn test_render_template() {
        let rendered = render_template("Please {0} {app} ({1} tries)", &inputs()).unwrap();
        assert_eq!(rendered, "Please restart the app (3 tries)");
    }

    #[test]
    fn test_render_template_leaves_other_braces() {
        let rendered = render_template(r#"{"reply": "{0}"} {not-a-name}"#, &inputs()).unwrap();
        assert_eq!(rendered, r#"{"reply": "restart"} {not-a-name}"#);
    }

    #[test]
    fn test_render_template_unknown_argument() {
        let err = render_template("{5} and {missing}", &inputs()).unwrap_err();
        assert!(err.to_string().contains("'5'"));
    }

    #[tokio::test]
    async fn test_template_executor() {
        let executor = template_executor("Please {0} {app}");

        assert_eq!(executor.kind(), "sync");
        assert_eq!(
            executor.execute(&inputs()).await.unwrap(),
            "Please restart the app"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_executor_appends_case_args() {
        let executor = command_executor("echo", vec!["Please".to_string()]);

        assert_eq!(executor.kind(), "async");
        assert_eq!(
            executor
                .execute(&CaseInputs::from_args(["restart", "your", "app"]))
                .await
                .unwrap(),
            "Please restart your app"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_executor_non_zero_exit() {
        let executor = command_executor("false", Vec::new());

        let err = executor.execute(&CaseInputs::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Executor { .. }));
    }

    #[tokio::test]
    async fn test_command_executor_missing_program() {
        let executor = command_executor("definitely-not-a-real-program-xyz", Vec::new());

        let err = executor.execute(&CaseInputs::default()).await.unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }
}
