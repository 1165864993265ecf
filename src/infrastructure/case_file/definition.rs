//! Case file schema and resolution into cases

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::executors::{command_executor, template_executor};
use crate::domain::DomainError;
use crate::domain::case::{Case, CaseInputs, Executor};

/// A TOML document holding `[[cases]]` tables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub cases: Vec<CaseDefinition>,
}

/// One `[[cases]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct CaseDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "case_pass_condition")]
    pub condition: String,
    #[serde(default, alias = "input_args")]
    pub args: Vec<Value>,
    #[serde(default, alias = "input_kwargs")]
    pub kwargs: Map<String, Value>,
    #[serde(default)]
    pub pass_cases: Vec<String>,
    #[serde(default)]
    pub fail_cases: Vec<String>,
    /// Kept untyped so that an unusable declaration maps to `InvalidExecutor`
    #[serde(default)]
    pub executor: Option<Value>,
}

/// Executor declarations understood in case files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutorDefinition {
    /// Fixed text, exposed as an awaitable
    Static { output: String },
    /// Text with `{0}` / `{name}` placeholders filled from the inputs
    Template { template: String },
    /// External program whose stdout is the output
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl ExecutorDefinition {
    pub fn parse(declaration: Value) -> Result<Self, DomainError> {
        serde_json::from_value(declaration).map_err(|e| {
            debug!("Unusable executor declaration: {}", e);
            DomainError::invalid_executor()
        })
    }

    pub fn into_executor(self) -> Executor {
        match self {
            ExecutorDefinition::Static { output } => Executor::ready(output),
            ExecutorDefinition::Template { template } => template_executor(template),
            ExecutorDefinition::Command { program, args } => command_executor(program, args),
        }
    }
}

impl CaseDefinition {
    pub fn into_case(self) -> Result<Case, DomainError> {
        let mut builder = Case::builder()
            .inputs(CaseInputs::new(self.args, self.kwargs))
            .condition(self.condition)
            .pass_cases(self.pass_cases)
            .fail_cases(self.fail_cases);

        if let Some(name) = self.name {
            builder = builder.name(name);
        }

        if let Some(declaration) = self.executor {
            builder = builder.executor(ExecutorDefinition::parse(declaration)?.into_executor());
        }

        builder.build()
    }
}

impl CaseFile {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::validation(format!("Invalid case file: {}", e)))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Build every declared case, failing on the first invalid one
    pub fn into_cases(self) -> Result<Vec<Case>, DomainError> {
        self.cases
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                definition.into_case().inspect_err(|e| {
                    warn!("Case #{} in case file is invalid: {}", index, e);
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TROUBLE_LOGGING_IN: &str = r#"
[[cases]]
name = "trouble logging in"
condition = "Chatbot should ask user to restart app."
args = ["User: I can't log in. App spins forever when I press login."]
pass_cases = [
    "Chatbot: Please restart your app.",
    "Chatbot: As a first step, lets try restarting the app.",
]
fail_cases = ["Chatbot: oh, that's a tough one"]
executor = { kind = "static", output = "Please restart your app" }

[[cases]]
case_pass_condition = "Greets the user by name"
kwargs = { user = "Ada" }
executor = { kind = "template", template = "Hello {user}!" }
"#;

    #[test]
    fn test_parse_case_file() {
        let file = CaseFile::parse(TROUBLE_LOGGING_IN).unwrap();

        assert_eq!(file.cases.len(), 2);
        let first = &file.cases[0];
        assert_eq!(first.name.as_deref(), Some("trouble logging in"));
        assert_eq!(first.pass_cases.len(), 2);
        assert_eq!(first.fail_cases.len(), 1);
        assert_eq!(
            first.args,
            vec![json!("User: I can't log in. App spins forever when I press login.")]
        );
        assert_eq!(file.cases[1].kwargs.get("user"), Some(&json!("Ada")));
    }

    #[tokio::test]
    async fn test_into_cases_resolves_executors() {
        let cases = CaseFile::parse(TROUBLE_LOGGING_IN)
            .unwrap()
            .into_cases()
            .unwrap();

        assert_eq!(cases[0].executor().kind(), "awaitable");
        assert_eq!(
            cases[0].executor().execute(cases[0].inputs()).await.unwrap(),
            "Please restart your app"
        );
        assert!(cases[0].full_prompt().contains("Chatbot should ask user to restart app."));

        assert_eq!(cases[1].name(), None);
        assert_eq!(cases[1].executor().kind(), "sync");
        assert_eq!(
            cases[1].executor().execute(cases[1].inputs()).await.unwrap(),
            "Hello Ada!"
        );
    }

    #[test]
    fn test_command_declaration() {
        let definition = ExecutorDefinition::parse(json!({
            "kind": "command",
            "program": "./chatbot",
            "args": ["--reply"]
        }))
        .unwrap();

        assert_eq!(
            definition,
            ExecutorDefinition::Command {
                program: "./chatbot".to_string(),
                args: vec!["--reply".to_string()],
            }
        );
        assert_eq!(definition.into_executor().kind(), "async");
    }

    #[test]
    fn test_invalid_executor_declarations() {
        for declaration in [
            json!("chatbot_response_generator"),
            json!(42),
            json!({"kind": "python", "module": "bot"}),
            json!({"output": "no kind"}),
            json!({"kind": "static"}),
        ] {
            let err = ExecutorDefinition::parse(declaration).unwrap_err();
            assert!(err.is_invalid_executor());
        }
    }

    #[test]
    fn test_missing_executor_is_invalid() {
        let file = CaseFile::parse(
            r#"
[[cases]]
condition = "anything"
"#,
        )
        .unwrap();

        let err = file.into_cases().unwrap_err();
        assert!(err.is_invalid_executor());
    }

    #[test]
    fn test_missing_condition_is_rejected() {
        let err = CaseFile::parse(
            r#"
[[cases]]
executor = { kind = "static", output = "x" }
"#,
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = CaseFile::load("does/not/exist.toml").await.unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }
}
