//! Judge verdict types

use serde::{Deserialize, Serialize};

/// Outcome label for a judged string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Pass,
    Fail,
}

impl Label {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Label::Pass } else { Label::Fail }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Label::Pass)
    }

    /// Parse a judge `result` field; anything other than PASS counts as FAIL
    pub fn from_result_field(result: &str) -> Self {
        Self::from_passed(result.eq_ignore_ascii_case("PASS"))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Pass => write!(f, "PASS"),
            Label::Fail => write!(f, "FAIL"),
        }
    }
}

/// Judge's decision on a single input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub explanation: String,
}

impl Verdict {
    pub fn new(passed: bool, explanation: impl Into<String>) -> Self {
        Self {
            passed,
            explanation: explanation.into(),
        }
    }

    pub fn pass(explanation: impl Into<String>) -> Self {
        Self::new(true, explanation)
    }

    pub fn fail(explanation: impl Into<String>) -> Self {
        Self::new(false, explanation)
    }

    pub fn label(&self) -> Label {
        Label::from_passed(self.passed)
    }

    pub fn into_pair(self) -> (bool, String) {
        (self.passed, self.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_result_field_is_case_insensitive() {
        assert_eq!(Label::from_result_field("PASS"), Label::Pass);
        assert_eq!(Label::from_result_field("pass"), Label::Pass);
        assert_eq!(Label::from_result_field(" pass "), Label::Fail);
        assert_eq!(Label::from_result_field("FAIL"), Label::Fail);
        assert_eq!(Label::from_result_field("maybe"), Label::Fail);
        assert_eq!(Label::from_result_field(""), Label::Fail);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::Pass).unwrap(), "\"PASS\"");
        assert_eq!(serde_json::to_string(&Label::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn test_verdict_pair() {
        let verdict = Verdict::pass("matches");
        assert_eq!(verdict.label(), Label::Pass);
        assert_eq!(verdict.into_pair(), (true, "matches".to_string()));
    }
}
