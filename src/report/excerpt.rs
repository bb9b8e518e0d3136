//! Bounded excerpt of a report for use as suggestion-prompt context.
//!
//! Large reports are cut down before they are handed to the suggestion
//! collaborator. Every list keeps its leading entries, so the excerpt is a
//! prefix of the source report at each level.

use super::types::CoverageReport;
use serde::{Deserialize, Serialize};

/// Per-level truncation limits, also the `[excerpt]` configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptLimits {
    #[serde(default = "default_one")]
    pub max_covergroups: usize,
    #[serde(default = "default_one")]
    pub max_coverpoints: usize,
    #[serde(default = "default_max_bins")]
    pub max_bins: usize,
    #[serde(default = "default_max_uncovered")]
    pub max_uncovered: usize,
    #[serde(default = "default_one")]
    pub max_cross_groups: usize,
}

impl Default for ExcerptLimits {
    fn default() -> Self {
        Self {
            max_covergroups: default_one(),
            max_coverpoints: default_one(),
            max_bins: default_max_bins(),
            max_uncovered: default_max_uncovered(),
            max_cross_groups: default_one(),
        }
    }
}

impl ExcerptLimits {
    /// Limits that keep everything.
    pub fn unbounded() -> Self {
        Self {
            max_covergroups: usize::MAX,
            max_coverpoints: usize::MAX,
            max_bins: usize::MAX,
            max_uncovered: usize::MAX,
            max_cross_groups: usize::MAX,
        }
    }
}

fn default_one() -> usize {
    1
}

fn default_max_bins() -> usize {
    2
}

fn default_max_uncovered() -> usize {
    4
}

impl CoverageReport {
    /// Copy of the report truncated to `limits`.
    ///
    /// `uncovered_bins` is truncated independently of the tree, so it may
    /// reference bins outside the excerpt.
    pub fn excerpt(&self, limits: &ExcerptLimits) -> CoverageReport {
        let mut out = self.clone();
        out.covergroups.truncate(limits.max_covergroups);
        for group in &mut out.covergroups {
            group.coverpoints.truncate(limits.max_coverpoints);
            for point in &mut group.coverpoints {
                point.bins.truncate(limits.max_bins);
            }
        }
        out.uncovered_bins.truncate(limits.max_uncovered);
        out.cross_coverage.truncate(limits.max_cross_groups);
        out
    }
}
