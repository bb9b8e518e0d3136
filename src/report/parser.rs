//! Report parse entry points.
//!
//! [`build_report`] is the single forward pass of the builder over the text.
//! The `parse_report*` functions run the builder and then the cross-coverage
//! stage. [`parse_report_file`] is the only function here that touches the
//! file system.
//!
//! # Example
//!
//! ```rust
//! use covgap::report::parse_report;
//!
//! let text = "Covergroup: cg_a\nCoverpoint: cp_x\nbin big[256:4096] hits: 0 UNCOVERED\n";
//! let report = parse_report(text)?;
//! assert_eq!(report.uncovered_bins[0].bin, "big[256:4096]");
//! # Ok::<(), covgap::errors::ParseError>(())
//! ```

use super::cross::{apply_cross_coverage, CrossCoverageSynthesizer, PlaceholderCrossCoverage};
use super::diagnostics::ParseDiagnostic;
use super::handlers::{handle_line, ReportBuilderState};
use super::types::CoverageReport;
use crate::errors::ParseError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parser options, also the `[parser]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Design name stamped into the report (default: "dma_controller")
    #[serde(default = "default_design")]
    pub design: String,

    /// Collect warning-level diagnostics for skipped lines (default: true)
    #[serde(default = "default_collect_diagnostics")]
    pub collect_diagnostics: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            design: default_design(),
            collect_diagnostics: default_collect_diagnostics(),
        }
    }
}

impl ParseOptions {
    pub fn for_design(design: impl Into<String>) -> Self {
        Self {
            design: design.into(),
            ..Default::default()
        }
    }
}

fn default_design() -> String {
    "dma_controller".to_string()
}

fn default_collect_diagnostics() -> bool {
    true
}

/// A successfully parsed report with the diagnostics gathered on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub report: CoverageReport,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parse with default options and the placeholder cross-coverage stage.
///
/// # Errors
///
/// `MalformedStructure` when a coverpoint or bin line has no open parent.
pub fn parse_report(text: &str) -> Result<CoverageReport, ParseError> {
    parse_report_with_options(text, &ParseOptions::default()).map(|outcome| outcome.report)
}

/// Parse with explicit options and the placeholder cross-coverage stage.
pub fn parse_report_with_options(
    text: &str,
    options: &ParseOptions,
) -> Result<ParseOutcome, ParseError> {
    parse_report_with(text, options, &PlaceholderCrossCoverage)
}

/// Parse with explicit options and cross-coverage stage.
pub fn parse_report_with(
    text: &str,
    options: &ParseOptions,
    synthesizer: &dyn CrossCoverageSynthesizer,
) -> Result<ParseOutcome, ParseError> {
    let ParseOutcome {
        report,
        diagnostics,
    } = build_report(text, options)?;

    Ok(ParseOutcome {
        report: apply_cross_coverage(report, synthesizer),
        diagnostics,
    })
}

/// Run the builder alone: one forward pass, no cross-coverage stage.
///
/// Blank lines are skipped; every other line is trimmed before
/// classification. Line numbers count raw lines from 1.
pub fn build_report(text: &str, options: &ParseOptions) -> Result<ParseOutcome, ParseError> {
    let _span = tracing::debug_span!("build_report", design = %options.design).entered();
    let mut state = ReportBuilderState::new(options.design.clone(), options.collect_diagnostics);

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        handle_line(&mut state, index + 1, line)?;
    }

    tracing::debug!(
        covergroups = state.report.covergroups.len(),
        uncovered = state.report.uncovered_bins.len(),
        "report built"
    );

    Ok(ParseOutcome {
        report: state.report,
        diagnostics: state.diagnostics.into_inner(),
    })
}

/// Read a report file and parse it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the report is malformed.
pub fn parse_report_file(path: &Path, options: &ParseOptions) -> Result<ParseOutcome> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))?;

    parse_report_with_options(&text, options)
        .with_context(|| format!("Failed to parse coverage report: {}", path.display()))
}
