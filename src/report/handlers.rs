//! Report builder: the cursor state machine and its per-line handlers.
//!
//! Handlers are deterministic state transformations with no I/O. The two
//! cursors are indices rather than references: the current covergroup is an
//! index into `report.covergroups`, and the current coverpoint is an index
//! into that covergroup's `coverpoints`. A coverpoint cursor is only ever
//! set while a covergroup cursor is set.
//!
//! # Handler Types
//!
//! - `handle_overall_coverage` - `Overall Coverage:` lines
//! - `handle_covergroup_header` - `Covergroup:` lines
//! - `handle_covergroup_coverage` - `Coverage: .. bins` lines
//! - `handle_coverpoint_header` - `Coverpoint:` lines
//! - `handle_bin` - bin lines
//!
//! `handle_line` classifies a line and dispatches to the handlers.

use super::classify::{classify_line, BinFields, LineKind};
use super::diagnostics::{DiagnosticKind, DiagnosticSink};
use super::types::{Bin, CoverageReport, Covergroup, Coverpoint, UncoveredBinRef};
use crate::errors::{MissingParent, ParseError};

/// Mutable state during one forward pass over a report.
pub(crate) struct ReportBuilderState {
    /// The model being built
    pub report: CoverageReport,
    /// Index of the open covergroup
    pub current_covergroup: Option<usize>,
    /// Index of the open coverpoint inside the open covergroup
    pub current_coverpoint: Option<usize>,
    pub diagnostics: DiagnosticSink,
}

impl ReportBuilderState {
    pub fn new(design: impl Into<String>, collect_diagnostics: bool) -> Self {
        Self {
            report: CoverageReport::new(design),
            current_covergroup: None,
            current_coverpoint: None,
            diagnostics: DiagnosticSink::new(collect_diagnostics),
        }
    }

    fn open_covergroup(&mut self) -> Option<&mut Covergroup> {
        let index = self.current_covergroup?;
        self.report.covergroups.get_mut(index)
    }
}

/// Classify one trimmed, non-blank line and apply it to the state.
pub(crate) fn handle_line(
    state: &mut ReportBuilderState,
    line_number: usize,
    line: &str,
) -> Result<(), ParseError> {
    match classify_line(line) {
        LineKind::OverallCoverage(value) => {
            handle_overall_coverage(state, value, line_number, line);
        }
        LineKind::CovergroupHeader { name } => handle_covergroup_header(state, name),
        LineKind::CovergroupCoverage(value) => {
            handle_covergroup_coverage(state, value, line_number, line);
        }
        LineKind::CoverpointHeader { name } => {
            handle_coverpoint_header(state, name, line_number, line)?;
        }
        LineKind::Bin(fields) => handle_bin(state, fields, line_number, line)?,
        LineKind::NearMissBin => {
            state
                .diagnostics
                .record(line_number, line, DiagnosticKind::NearMissBin);
        }
        LineKind::Unrecognized => {}
    }
    Ok(())
}

/// Set the overall percentage; a line without a number keeps the prior value.
pub(crate) fn handle_overall_coverage(
    state: &mut ReportBuilderState,
    value: Option<f64>,
    line_number: usize,
    line: &str,
) {
    match value {
        Some(pct) => state.report.overall_coverage = pct,
        None => state
            .diagnostics
            .record(line_number, line, DiagnosticKind::MissingPercentage),
    }
}

/// Open a new covergroup and close any open coverpoint.
pub(crate) fn handle_covergroup_header(state: &mut ReportBuilderState, name: &str) {
    tracing::debug!(covergroup = name, "opening covergroup");
    state.report.covergroups.push(Covergroup::new(name));
    state.current_covergroup = Some(state.report.covergroups.len() - 1);
    state.current_coverpoint = None;
}

/// Update the open covergroup's percentage; discarded when none is open.
pub(crate) fn handle_covergroup_coverage(
    state: &mut ReportBuilderState,
    value: Option<f64>,
    line_number: usize,
    line: &str,
) {
    let Some(pct) = value else {
        state
            .diagnostics
            .record(line_number, line, DiagnosticKind::MissingPercentage);
        return;
    };

    match state.open_covergroup() {
        Some(group) => group.coverage = pct,
        None => state
            .diagnostics
            .record(line_number, line, DiagnosticKind::OrphanCoverage),
    }
}

/// Open a new coverpoint inside the open covergroup.
///
/// # Errors
///
/// `MalformedStructure` when no covergroup is open.
pub(crate) fn handle_coverpoint_header(
    state: &mut ReportBuilderState,
    name: &str,
    line_number: usize,
    line: &str,
) -> Result<(), ParseError> {
    let group = state
        .open_covergroup()
        .ok_or_else(|| ParseError::malformed(line_number, line, MissingParent::Covergroup))?;

    tracing::debug!(covergroup = %group.name, coverpoint = name, "opening coverpoint");
    group.coverpoints.push(Coverpoint::new(name));
    let index = group.coverpoints.len() - 1;
    state.current_coverpoint = Some(index);
    Ok(())
}

/// Append a bin to the open coverpoint, recording a gap when uncovered.
///
/// # Errors
///
/// `MalformedStructure` when no coverpoint is open.
pub(crate) fn handle_bin(
    state: &mut ReportBuilderState,
    fields: BinFields<'_>,
    line_number: usize,
    line: &str,
) -> Result<(), ParseError> {
    let missing = || ParseError::malformed(line_number, line, MissingParent::Coverpoint);
    let cp_index = state.current_coverpoint.ok_or_else(missing)?;
    let group = state.open_covergroup().ok_or_else(missing)?;
    let group_name = group.name.clone();
    let point = group.coverpoints.get_mut(cp_index).ok_or_else(missing)?;

    let bin = Bin {
        name: fields.name.to_string(),
        range: fields.range.to_string(),
        hits: fields.hits,
        covered: fields.covered,
    };

    let gap = (!bin.covered).then(|| UncoveredBinRef {
        covergroup: group_name,
        coverpoint: point.name.clone(),
        bin: bin.identifier(),
    });

    point.bins.push(bin);
    if let Some(gap) = gap {
        tracing::debug!(bin = %gap.path(), "uncovered bin");
        state.report.uncovered_bins.push(gap);
    }
    Ok(())
}
