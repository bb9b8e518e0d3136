//! Suggestion records returned by the suggestion collaborator.
//!
//! `priority` and `difficulty` are closed enumerations with an explicit
//! catch-all arm. Values outside the vocabulary are kept verbatim, so a
//! record serializes back exactly as it arrived.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much closing the targeted gap matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Any other label, e.g. "Critical"
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        match label.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated effort to write the suggested test.
///
/// `Low` is not part of the documented Easy/Medium/Hard scale but does turn
/// up in collaborator output; it is scored like an unknown label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Low,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Low => "Low",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            "Low" => Self::Low,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remediation suggestion for an uncovered bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Dotted path of the targeted bin, e.g. `cg_transfer_size.cp_size.max[4096]`
    pub target_bin: String,
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub suggestion: String,
    pub test_outline: Vec<String>,
    /// Bins that must be hit first; empty when independent
    pub dependencies: Vec<String>,
    pub reasoning: String,
}

impl Suggestion {
    /// Minimal record for a target; free-text fields are left empty.
    pub fn new(
        target_bin: impl Into<String>,
        priority: impl Into<Priority>,
        difficulty: impl Into<Difficulty>,
    ) -> Self {
        Self {
            target_bin: target_bin.into(),
            priority: priority.into(),
            difficulty: difficulty.into(),
            suggestion: String::new(),
            test_outline: Vec::new(),
            dependencies: Vec::new(),
            reasoning: String::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Envelope the collaborator returns: `{"suggestions": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    pub suggestions: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_priorities() {
        assert_eq!(Priority::from("High"), Priority::High);
        assert_eq!(Priority::from("Medium"), Priority::Medium);
        assert_eq!(Priority::from("Low"), Priority::Low);
    }

    #[test]
    fn test_unknown_labels_are_preserved() {
        assert_eq!(
            Priority::from("Critical"),
            Priority::Other("Critical".into())
        );
        assert_eq!(String::from(Priority::from("Critical")), "Critical");
        assert_eq!(Difficulty::from("Trivial").as_str(), "Trivial");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(Priority::from("high"), Priority::Other("high".into()));
    }

    #[test]
    fn test_low_difficulty_has_own_arm() {
        assert_eq!(Difficulty::from("Low"), Difficulty::Low);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "target_bin": "cross_size_burst.small, wrap",
            "priority": "Medium",
            "difficulty": "Easy",
            "suggestion": "Test a small transfer with wrap bursts.",
            "test_outline": ["Configure a small transfer.", "Set burst type to wrap."],
            "dependencies": ["cg_transfer_size.cp_size.small"],
            "reasoning": "Missing cross combination."
        }"#;
        let sug: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(sug.priority, Priority::Medium);
        assert_eq!(sug.difficulty, Difficulty::Easy);
        assert_eq!(sug.test_outline.len(), 2);
        assert!(sug.has_dependencies());
    }

    #[test]
    fn test_serialize_keeps_unknown_label() {
        let sug = Suggestion::new("cg.cp.b", "Critical", "Trivial");
        let value = serde_json::to_value(&sug).unwrap();
        assert_eq!(value["priority"], "Critical");
        assert_eq!(value["difficulty"], "Trivial");
    }

    #[test]
    fn test_batch_envelope() {
        let batch: SuggestionBatch = serde_json::from_str(r#"{"suggestions": []}"#).unwrap();
        assert!(batch.suggestions.is_empty());
    }
}
