//! Scoring and ranking of coverage-closure suggestions.
//!
//! Suggestions come from an external collaborator (see [`crate::advisor`]).
//! Each one is scored independently by a pure function, then the whole list
//! is stable-sorted once, highest score first.
//!
//! ```rust
//! use covgap::prioritize::prioritize_json;
//!
//! let ranked = prioritize_json(r#"{"suggestions": [
//!     {"target_bin": "cg.cp.a", "priority": "Medium", "difficulty": "Hard",
//!      "suggestion": "", "test_outline": [], "dependencies": ["x"], "reasoning": ""},
//!     {"target_bin": "cg.cp.b", "priority": "High", "difficulty": "Easy",
//!      "suggestion": "", "test_outline": [], "dependencies": [], "reasoning": ""}
//! ]}"#)?;
//! assert_eq!(ranked[0].suggestion.target_bin, "cg.cp.b");
//! assert_eq!(ranked[0].priority_score, 4.6);
//! assert_eq!(ranked[1].priority_score, 2.25);
//! # Ok::<(), covgap::errors::Error>(())
//! ```

pub mod ranking;
pub mod scoring;
pub mod suggestion;

pub use ranking::{
    prioritize_batch, prioritize_json, rank, rank_parallel, rank_with, sort_ranked,
    RankedSuggestion,
};
pub use scoring::{
    dependency_score, impact, inverse_difficulty, round_score, score, score_breakdown,
    score_breakdown_with, score_with, ScoreBreakdown,
};
pub use suggestion::{Difficulty, Priority, Suggestion, SuggestionBatch};
