//! Case files - TOML declarations of cases

mod definition;
mod executors;

pub use definition::{CaseDefinition, CaseFile, ExecutorDefinition};
pub use executors::{command_executor, render_template, template_executor};
