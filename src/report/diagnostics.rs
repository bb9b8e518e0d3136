//! Warning-level diagnostics collected while parsing.
//!
//! Diagnostics never change what the parser builds. They record lines that
//! were skipped but look like they were meant to carry data, so a caller can
//! tell a tolerant parse from a report in an unexpected dialect.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Line contains the bin keyword but not the full bin shape
    NearMissBin,
    /// Covergroup coverage line with no covergroup open; value discarded
    OrphanCoverage,
    /// Percentage line without a `<digits>.<digits>` number
    MissingPercentage,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NearMissBin => "bin line does not match `bin <name>[<range>] hits: <n> covered|UNCOVERED`",
            Self::OrphanCoverage => "covergroup coverage outside any covergroup",
            Self::MissingPercentage => "coverage line without a decimal percentage",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    /// 1-based line number in the raw input
    pub line_number: usize,
    pub line: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} (`{}`)", self.line_number, self.kind, self.line)
    }
}

/// Sink for diagnostics; a disabled sink drops everything.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticSink {
    enabled: bool,
    collected: Vec<ParseDiagnostic>,
}

impl DiagnosticSink {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            collected: Vec::new(),
        }
    }

    pub fn record(&mut self, line_number: usize, line: &str, kind: DiagnosticKind) {
        match kind {
            DiagnosticKind::NearMissBin => {
                tracing::warn!(line_number, line, %kind, "skipping report line")
            }
            _ => tracing::debug!(line_number, line, %kind, "ignoring report value"),
        }
        if self.enabled {
            self.collected.push(ParseDiagnostic {
                line_number,
                line: line.to_string(),
                kind,
            });
        }
    }

    pub fn into_inner(self) -> Vec<ParseDiagnostic> {
        self.collected
    }
}
