//! Cross-coverage synthesis stage.
//!
//! Runs after the report builder has finished. The input grammar has no
//! cross-coverage section yet, so the default stage appends a fixed
//! illustrative group. A future stage that parses real cross sections
//! implements [`CrossCoverageSynthesizer`] and replaces it without touching
//! the builder. Callers must not depend on the placeholder's literal content.

use super::types::{CoverageReport, CrossCoverageGroup};

pub trait CrossCoverageSynthesizer {
    /// Cross-coverage groups for a fully built report.
    fn synthesize(&self, report: &CoverageReport) -> Vec<CrossCoverageGroup>;

    fn name(&self) -> &str;
}

/// Append the synthesizer's groups to the report.
pub fn apply_cross_coverage(
    mut report: CoverageReport,
    synthesizer: &dyn CrossCoverageSynthesizer,
) -> CoverageReport {
    let groups = synthesizer.synthesize(&report);
    tracing::debug!(
        stage = synthesizer.name(),
        groups = groups.len(),
        "cross-coverage synthesis"
    );
    report.cross_coverage.extend(groups);
    report
}

/// Stand-in stage emitting one fixed cross group.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCrossCoverage;

impl CrossCoverageSynthesizer for PlaceholderCrossCoverage {
    fn synthesize(&self, _report: &CoverageReport) -> Vec<CrossCoverageGroup> {
        vec![CrossCoverageGroup {
            name: "cross_size_burst".to_string(),
            coverage: 50.0,
            uncovered: vec![
                "<small, wrap>".to_string(),
                "<medium, wrap>".to_string(),
                "<medium, fixed>".to_string(),
            ],
        }]
    }

    fn name(&self) -> &str {
        "PlaceholderCrossCoverage"
    }
}

/// Stage that adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCrossCoverage;

impl CrossCoverageSynthesizer for NoCrossCoverage {
    fn synthesize(&self, _report: &CoverageReport) -> Vec<CrossCoverageGroup> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "NoCrossCoverage"
    }
}
