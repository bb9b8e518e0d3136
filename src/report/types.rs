//! Core data types for a parsed functional-coverage report.
//!
//! All types here are plain serializable data. The serialized field names are
//! the exchange format handed to the suggestion collaborator:
//! `design`, `overall_coverage`, `covergroups`, `uncovered_bins`,
//! `cross_coverage`.
//!
//! # Types
//!
//! - [`CoverageReport`] - Root of the model
//! - [`Covergroup`] - Named group of coverpoints
//! - [`Coverpoint`] - Named value space partitioned into bins
//! - [`Bin`] - One partition with hit count and covered flag
//! - [`UncoveredBinRef`] - Flat cross-reference to an uncovered bin
//! - [`CrossCoverageGroup`] - Cross-coverage gaps

use serde::{Deserialize, Serialize};

/// Parsed coverage report.
///
/// Owns every child exclusively; nothing in it aliases the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub design: String,
    /// Overall coverage percentage (0-100), 0.0 until an overall line sets it
    pub overall_coverage: f64,
    pub covergroups: Vec<Covergroup>,
    /// One entry per uncovered bin, in input order
    pub uncovered_bins: Vec<UncoveredBinRef>,
    pub cross_coverage: Vec<CrossCoverageGroup>,
}

impl CoverageReport {
    /// Create an empty report for the given design.
    pub fn new(design: impl Into<String>) -> Self {
        Self {
            design: design.into(),
            overall_coverage: 0.0,
            covergroups: Vec::new(),
            uncovered_bins: Vec::new(),
            cross_coverage: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Covergroup {
    pub name: String,
    pub coverage: f64,
    pub coverpoints: Vec<Coverpoint>,
}

impl Covergroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coverage: 0.0,
            coverpoints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverpoint {
    pub name: String,
    pub bins: Vec<Bin>,
}

impl Coverpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bins: Vec::new(),
        }
    }
}

/// One bin of a coverpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    pub name: String,
    /// Bracketed range annotation verbatim (e.g. `[0:255]`), empty when absent
    pub range: String,
    pub hits: u64,
    pub covered: bool,
}

impl Bin {
    /// Composite identifier: name followed by the range annotation.
    ///
    /// ```rust
    /// use covgap::report::Bin;
    ///
    /// let bin = Bin { name: "big".into(), range: "[256:4096]".into(), hits: 0, covered: false };
    /// assert_eq!(bin.identifier(), "big[256:4096]");
    /// ```
    pub fn identifier(&self) -> String {
        format!("{}{}", self.name, self.range)
    }
}

/// Denormalized pointer from the flat gap list back into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UncoveredBinRef {
    pub covergroup: String,
    pub coverpoint: String,
    /// Composite bin identifier, see [`Bin::identifier`]
    pub bin: String,
}

impl UncoveredBinRef {
    /// Dotted path `covergroup.coverpoint.bin`, the form suggestion
    /// records use for `target_bin`.
    pub fn path(&self) -> String {
        format!("{}.{}.{}", self.covergroup, self.coverpoint, self.bin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCoverageGroup {
    pub name: String,
    pub coverage: f64,
    /// Uncovered combination labels such as `<small, wrap>`
    pub uncovered: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_report_is_all_default() {
        let report = CoverageReport::new("dut");
        assert_eq!(report.design, "dut");
        assert_eq!(report.overall_coverage, 0.0);
        assert!(report.covergroups.is_empty());
        assert!(report.uncovered_bins.is_empty());
        assert!(report.cross_coverage.is_empty());
    }

    #[test]
    fn test_bin_identifier_without_range() {
        let bin = Bin {
            name: "wrap".into(),
            range: String::new(),
            hits: 0,
            covered: false,
        };
        assert_eq!(bin.identifier(), "wrap");
    }

    #[test]
    fn test_uncovered_ref_path() {
        let gap = UncoveredBinRef {
            covergroup: "cg_transfer_size".into(),
            coverpoint: "cp_size".into(),
            bin: "max[4096]".into(),
        };
        assert_eq!(gap.path(), "cg_transfer_size.cp_size.max[4096]");
    }

    #[test]
    fn test_serialized_field_names() {
        let mut report = CoverageReport::new("dma_controller");
        report.covergroups.push(Covergroup {
            name: "cg_a".into(),
            coverage: 50.0,
            coverpoints: vec![Coverpoint {
                name: "cp_x".into(),
                bins: vec![Bin {
                    name: "small".into(),
                    range: "[0:255]".into(),
                    hits: 10,
                    covered: true,
                }],
            }],
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["design"], "dma_controller");
        assert_eq!(value["overall_coverage"], 0.0);
        assert_eq!(value["covergroups"][0]["coverpoints"][0]["bins"][0]["range"], "[0:255]");
        assert_eq!(value["covergroups"][0]["coverpoints"][0]["bins"][0]["hits"], 10);
        assert!(value["uncovered_bins"].as_array().unwrap().is_empty());
        assert!(value["cross_coverage"].as_array().unwrap().is_empty());
    }
}
