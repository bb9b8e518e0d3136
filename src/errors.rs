//! Error types for coverage report parsing and suggestion prioritization.
//!
//! Only structural violations are errors. Unrecognized lines, near-miss bin
//! lines and unknown priority/difficulty values are absorbed by the parser and
//! scorer and never surface here.
//!
//! # Example
//!
//! ```rust
//! use covgap::errors::{MissingParent, ParseError};
//!
//! let err = ParseError::malformed(3, "bin small hits: 1 covered", MissingParent::Coverpoint);
//! assert_eq!(err.line_number(), 3);
//! assert!(err.to_string().contains("no coverpoint"));
//! ```

use std::fmt;
use thiserror::Error;

/// The parent cursor that was unset when a child line was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParent {
    /// A coverpoint header appeared before any covergroup header
    Covergroup,
    /// A bin line appeared with no active coverpoint
    Coverpoint,
}

impl fmt::Display for MissingParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Covergroup => write!(f, "covergroup"),
            Self::Coverpoint => write!(f, "coverpoint"),
        }
    }
}

/// Terminal failure of a single report parse.
///
/// No partial model accompanies this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A coverpoint or bin line arrived before its required parent
    #[error("malformed report at line {line_number}: `{line}` appears before any {missing} is open (no {missing} header precedes it)")]
    MalformedStructure {
        /// 1-based line number in the raw input
        line_number: usize,
        /// Trimmed line content
        line: String,
        missing: MissingParent,
    },
}

impl ParseError {
    pub fn malformed(line_number: usize, line: impl Into<String>, missing: MissingParent) -> Self {
        Self::MalformedStructure {
            line_number,
            line: line.into(),
            missing,
        }
    }

    /// 1-based line number of the offending line.
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedStructure { line_number, .. } => *line_number,
        }
    }

    /// Content of the offending line.
    pub fn line(&self) -> &str {
        match self {
            Self::MalformedStructure { line, .. } => line,
        }
    }
}

/// Umbrella error for operations that decode external input.
///
/// File and configuration I/O return `anyhow::Result` with path context.
#[derive(Debug, Error)]
pub enum Error {
    /// Structural report errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Suggestion or report JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
