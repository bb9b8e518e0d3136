//! Functional-coverage report parsing.
//!
//! Turns the human-readable report a verification tool prints into a
//! [`CoverageReport`]: covergroups, coverpoints and bins in input order, a
//! flat list of uncovered bins, and cross-coverage gaps.
//!
//! # Module Structure
//!
//! - [`types`] - Report model (pure data)
//! - [`classify`] - Line classifier
//! - `handlers` - Builder state machine
//! - [`cross`] - Cross-coverage synthesis stage
//! - [`diagnostics`] - Warnings for skipped lines
//! - [`parser`] - Entry points (text and file)
//! - [`query`] - Read-only report queries
//! - [`excerpt`] - Truncated copies for prompt context
//! - [`emit`] - Re-emitter for the same grammar
//!
//! ```text
//!   raw text ──> classify ──> handlers ──> cross ──> CoverageReport
//!                                 │
//!                                 └──> diagnostics
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use covgap::report::{parse_report_with_options, ParseOptions};
//!
//! let text = "\
//! Overall Coverage: 68.75%
//! Covergroup: cg_transfer_size
//!   Coverage: 50.00% (1/2 bins)
//!   Coverpoint: cp_size
//!     bin small[0:255] hits: 1523 covered
//!     bin max[4096] hits: 0 UNCOVERED
//! ";
//!
//! let outcome = parse_report_with_options(text, &ParseOptions::for_design("dma"))?;
//! assert_eq!(outcome.report.overall_coverage, 68.75);
//! assert_eq!(outcome.report.uncovered_bins[0].path(), "cg_transfer_size.cp_size.max[4096]");
//! # Ok::<(), covgap::errors::ParseError>(())
//! ```

pub mod classify;
pub mod cross;
pub mod diagnostics;
pub mod emit;
pub mod excerpt;
mod handlers;
pub mod parser;
pub mod query;
pub mod types;

pub use cross::{
    apply_cross_coverage, CrossCoverageSynthesizer, NoCrossCoverage, PlaceholderCrossCoverage,
};
pub use diagnostics::{DiagnosticKind, ParseDiagnostic};
pub use emit::emit_report;
pub use excerpt::ExcerptLimits;
pub use parser::{
    build_report, parse_report, parse_report_file, parse_report_with, parse_report_with_options,
    ParseOptions, ParseOutcome,
};
pub use types::{Bin, CoverageReport, Covergroup, Coverpoint, CrossCoverageGroup, UncoveredBinRef};
