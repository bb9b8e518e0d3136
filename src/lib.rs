//! Functional-coverage report parsing and coverage-closure prioritization.
//!
//! - [`report`] turns a verification tool's text coverage report into a
//!   [`CoverageReport`] with a flat list of uncovered bins.
//! - [`prioritize`] scores remediation suggestions and ranks them.
//! - [`advisor`] is the seam to an external suggestion service.
//! - [`config`] holds `.covgap.toml` settings.

// Export modules for library usage
pub mod advisor;
pub mod config;
pub mod errors;
pub mod prioritize;
pub mod report;

// Re-export commonly used types
pub use crate::errors::{Error, MissingParent, ParseError};

pub use crate::report::{
    build_report, parse_report, parse_report_file, parse_report_with, parse_report_with_options,
    Bin, CoverageReport, Covergroup, Coverpoint, CrossCoverageGroup, CrossCoverageSynthesizer,
    ParseOptions, ParseOutcome, UncoveredBinRef,
};

pub use crate::prioritize::{
    prioritize_json, rank, rank_parallel, rank_with, score, score_breakdown, Difficulty, Priority,
    RankedSuggestion, Suggestion, SuggestionBatch,
};

pub use crate::config::CovgapConfig;
