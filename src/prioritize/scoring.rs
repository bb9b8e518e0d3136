//! Deterministic priority score for a suggestion.
//!
//! ```text
//! score = round2(impact * 0.4 + (1 / difficulty) * 0.3 + dependency * 0.3)
//! ```
//!
//! | priority | impact |  | difficulty | divisor |  | dependencies | score |
//! |----------|--------|--|------------|---------|--|--------------|-------|
//! | High     | 10     |  | Easy       | 1       |  | none         | 1.0   |
//! | Medium   | 5      |  | Medium     | 2       |  | any          | 0.5   |
//! | Low      | 2      |  | Hard       | 3       |  |              |       |
//! | other    | 5      |  | Low/other  | 2       |  |              |       |
//!
//! Rounding is half away from zero on `score * 100` (see [`round_score`]).

use super::suggestion::{Difficulty, Priority, Suggestion};
use crate::config::{DependencyScores, DifficultyTable, ImpactTable, ScoringConfig};
use serde::Serialize;

/// Sub-scores behind a final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub impact: f64,
    pub inverse_difficulty: f64,
    pub dependency: f64,
    /// Weighted sum before rounding
    pub weighted: f64,
    /// Final score, two decimal places
    pub score: f64,
}

/// Round to 2 decimal places, halves away from zero.
///
/// `0.125` becomes `0.13` here where banker's rounding would give `0.12`.
/// Removes floating-point noise like 4.6000000000000005 -> 4.6
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

pub fn impact(priority: &Priority, table: &ImpactTable) -> f64 {
    match priority {
        Priority::High => table.high,
        Priority::Medium => table.medium,
        Priority::Low => table.low,
        Priority::Other(_) => table.unknown,
    }
}

pub fn inverse_difficulty(difficulty: &Difficulty, table: &DifficultyTable) -> f64 {
    let divisor = match difficulty {
        Difficulty::Easy => table.easy,
        Difficulty::Medium => table.medium,
        Difficulty::Hard => table.hard,
        Difficulty::Low | Difficulty::Other(_) => table.unknown,
    };
    1.0 / divisor
}

pub fn dependency_score(dependencies: &[String], scores: &DependencyScores) -> f64 {
    if dependencies.is_empty() {
        scores.independent
    } else {
        scores.dependent
    }
}

pub fn score_breakdown_with(suggestion: &Suggestion, config: &ScoringConfig) -> ScoreBreakdown {
    let impact = impact(&suggestion.priority, &config.impact);
    let inverse_difficulty = inverse_difficulty(&suggestion.difficulty, &config.difficulty);
    let dependency = dependency_score(&suggestion.dependencies, &config.dependency);

    let weights = &config.weights;
    let weighted = impact * weights.impact
        + inverse_difficulty * weights.difficulty
        + dependency * weights.dependency;

    ScoreBreakdown {
        impact,
        inverse_difficulty,
        dependency,
        weighted,
        score: round_score(weighted),
    }
}

pub fn score_breakdown(suggestion: &Suggestion) -> ScoreBreakdown {
    score_breakdown_with(suggestion, &ScoringConfig::default())
}

pub fn score_with(suggestion: &Suggestion, config: &ScoringConfig) -> f64 {
    score_breakdown_with(suggestion, config).score
}

/// Score with the default weights and tables.
///
/// ```rust
/// use covgap::prioritize::{score, Suggestion};
///
/// assert_eq!(score(&Suggestion::new("cg.cp.b", "High", "Easy")), 4.6);
/// ```
pub fn score(suggestion: &Suggestion) -> f64 {
    score_with(suggestion, &ScoringConfig::default())
}
