//! Rank scored suggestions, highest score first.
//!
//! The sort is `slice::sort_by`, which is stable: suggestions with equal
//! scores keep their input order. Equal scores are common (every
//! Medium/Easy/independent suggestion scores 2.6), so callers rely on this.

use super::scoring::score_with;
use super::suggestion::{Suggestion, SuggestionBatch};
use crate::config::ScoringConfig;
use crate::errors::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A suggestion with its derived score attached.
///
/// Serializes as the suggestion's own fields plus `priority_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSuggestion {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    pub priority_score: f64,
}

impl RankedSuggestion {
    pub fn scored(suggestion: Suggestion, config: &ScoringConfig) -> Self {
        let priority_score = score_with(&suggestion, config);
        Self {
            suggestion,
            priority_score,
        }
    }
}

/// Stable sort, descending by `priority_score`.
pub fn sort_ranked(ranked: &mut [RankedSuggestion]) {
    ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
}

pub fn rank_with(suggestions: Vec<Suggestion>, config: &ScoringConfig) -> Vec<RankedSuggestion> {
    let mut ranked: Vec<RankedSuggestion> = suggestions
        .into_iter()
        .map(|s| RankedSuggestion::scored(s, config))
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

/// Score with default weights and rank.
pub fn rank(suggestions: Vec<Suggestion>) -> Vec<RankedSuggestion> {
    rank_with(suggestions, &ScoringConfig::default())
}

/// Score in parallel, then apply the same whole-list stable sort.
///
/// Produces exactly the output of [`rank_with`].
pub fn rank_parallel(
    suggestions: Vec<Suggestion>,
    config: &ScoringConfig,
) -> Vec<RankedSuggestion> {
    let mut ranked: Vec<RankedSuggestion> = suggestions
        .into_par_iter()
        .map(|s| RankedSuggestion::scored(s, config))
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

pub fn prioritize_batch(batch: SuggestionBatch, config: &ScoringConfig) -> Vec<RankedSuggestion> {
    rank_with(batch.suggestions, config)
}

/// Parse a `{"suggestions": [...]}` document and rank it with default weights.
///
/// # Errors
///
/// Returns an error when the JSON does not have the suggestion shape.
pub fn prioritize_json(json: &str) -> Result<Vec<RankedSuggestion>> {
    let batch: SuggestionBatch = serde_json::from_str(json)?;
    tracing::debug!(count = batch.suggestions.len(), "ranking suggestions");
    Ok(prioritize_batch(batch, &ScoringConfig::default()))
}
