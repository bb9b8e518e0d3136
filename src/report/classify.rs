//! Line classifier for the coverage report grammar.
//!
//! Each trimmed, non-blank line maps to exactly one [`LineKind`]. Rules are
//! tried in a fixed order and the first match wins:
//!
//! 1. `Overall Coverage:` - overall percentage
//! 2. `Covergroup:` - covergroup header
//! 3. `Coverage:` together with `bins` - covergroup percentage
//! 4. `Coverpoint:` - coverpoint header
//! 5. `bin ` - bin line, if the full bin pattern matches
//! 6. anything else - unrecognized
//!
//! Rule 1 must precede rule 3 because `Overall Coverage:` also contains
//! `Coverage:`.

use once_cell::sync::Lazy;
use regex::Regex;

pub const OVERALL_COVERAGE_MARKER: &str = "Overall Coverage:";
pub const COVERGROUP_MARKER: &str = "Covergroup:";
pub const COVERAGE_MARKER: &str = "Coverage:";
pub const BINS_MARKER: &str = "bins";
pub const COVERPOINT_MARKER: &str = "Coverpoint:";
pub const BIN_KEYWORD: &str = "bin ";

pub const COVERED_STATUS: &str = "covered";
pub const UNCOVERED_STATUS: &str = "UNCOVERED";

static PERCENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\d+)").unwrap());

static BIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"bin\s+(\w+)(\[.*?\])?\s+hits:\s+(\d+)\s+(covered|UNCOVERED)").unwrap()
});

/// Fields captured from a bin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinFields<'a> {
    pub name: &'a str,
    /// Bracketed range verbatim, or `""`
    pub range: &'a str,
    pub hits: u64,
    pub covered: bool,
}

/// Classification of one report line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind<'a> {
    /// Overall coverage line; `None` when no `<digits>.<digits>` is present
    OverallCoverage(Option<f64>),
    CovergroupHeader { name: &'a str },
    /// Covergroup-level coverage; `None` when no number is present
    CovergroupCoverage(Option<f64>),
    CoverpointHeader { name: &'a str },
    Bin(BinFields<'a>),
    /// Contains the bin keyword but not the full bin shape
    NearMissBin,
    Unrecognized,
}

impl LineKind<'_> {
    /// Whether the line contributes nothing to the model.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::NearMissBin | Self::Unrecognized)
    }
}

/// Classify a trimmed, non-blank line.
///
/// ```rust
/// use covgap::report::classify::{classify_line, LineKind};
///
/// assert_eq!(
///     classify_line("Covergroup: cg_transfer_size"),
///     LineKind::CovergroupHeader { name: "cg_transfer_size" }
/// );
/// assert_eq!(classify_line("-----"), LineKind::Unrecognized);
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.contains(OVERALL_COVERAGE_MARKER) {
        LineKind::OverallCoverage(extract_percentage(line))
    } else if line.contains(COVERGROUP_MARKER) {
        LineKind::CovergroupHeader {
            name: extract_name(line),
        }
    } else if line.contains(COVERAGE_MARKER) && line.contains(BINS_MARKER) {
        LineKind::CovergroupCoverage(extract_percentage(line))
    } else if line.contains(COVERPOINT_MARKER) {
        LineKind::CoverpointHeader {
            name: extract_name(line),
        }
    } else if line.contains(BIN_KEYWORD) {
        match_bin(line).map_or(LineKind::NearMissBin, LineKind::Bin)
    } else {
        LineKind::Unrecognized
    }
}

/// First `<digits>.<digits>` substring parsed as a float.
pub fn extract_percentage(line: &str) -> Option<f64> {
    PERCENT_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Text between the first colon and the next colon (or end of line), trimmed.
pub fn extract_name(line: &str) -> &str {
    line.split(':').nth(1).map(str::trim).unwrap_or("")
}

/// Match the bin pattern anywhere in the line.
///
/// A hit count too large for `u64` is treated as a mismatch.
pub fn match_bin(line: &str) -> Option<BinFields<'_>> {
    let caps = BIN_PATTERN.captures(line)?;
    let name = caps.get(1)?.as_str();
    let range = caps.get(2).map_or("", |m| m.as_str());
    let hits = caps.get(3)?.as_str().parse().ok()?;
    let covered = caps.get(4)?.as_str() == COVERED_STATUS;

    Some(BinFields {
        name,
        range,
        hits,
        covered,
    })
}
