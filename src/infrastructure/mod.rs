//! Infrastructure layer - External service implementations

pub mod case_file;
pub mod judge;
pub mod llm;
pub mod logging;
pub mod services;
