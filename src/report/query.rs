//! Read-only queries over a parsed [`CoverageReport`].

use super::types::{Bin, CoverageReport, Covergroup, Coverpoint, UncoveredBinRef};

impl CoverageReport {
    pub fn find_covergroup(&self, name: &str) -> Option<&Covergroup> {
        self.covergroups.iter().find(|cg| cg.name == name)
    }

    pub fn find_coverpoint(&self, covergroup: &str, coverpoint: &str) -> Option<&Coverpoint> {
        self.find_covergroup(covergroup)?
            .coverpoints
            .iter()
            .find(|cp| cp.name == coverpoint)
    }

    /// Resolve a gap reference back to its bin.
    pub fn resolve(&self, gap: &UncoveredBinRef) -> Option<&Bin> {
        self.find_coverpoint(&gap.covergroup, &gap.coverpoint)?
            .bins
            .iter()
            .find(|bin| bin.identifier() == gap.bin)
    }

    /// All bins with their owning covergroup and coverpoint, in input order.
    pub fn bins(&self) -> impl Iterator<Item = (&Covergroup, &Coverpoint, &Bin)> {
        self.covergroups.iter().flat_map(|cg| {
            cg.coverpoints
                .iter()
                .flat_map(move |cp| cp.bins.iter().map(move |bin| (cg, cp, bin)))
        })
    }

    pub fn total_bins(&self) -> usize {
        self.bins().count()
    }

    pub fn covered_bins(&self) -> usize {
        self.bins().filter(|(_, _, bin)| bin.covered).count()
    }

    /// Fraction of bins marked covered; 1.0 for a report with no bins.
    pub fn bin_coverage_ratio(&self) -> f64 {
        match self.total_bins() {
            0 => 1.0,
            total => self.covered_bins() as f64 / total as f64,
        }
    }

    /// Gap references rebuilt from the tree, in input order.
    ///
    /// Equals `uncovered_bins` for any report the parser produced.
    pub fn derive_uncovered_bins(&self) -> Vec<UncoveredBinRef> {
        self.bins()
            .filter(|(_, _, bin)| !bin.covered)
            .map(|(cg, cp, bin)| UncoveredBinRef {
                covergroup: cg.name.clone(),
                coverpoint: cp.name.clone(),
                bin: bin.identifier(),
            })
            .collect()
    }
}

impl Coverpoint {
    pub fn uncovered(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter().filter(|bin| !bin.covered)
    }
}
