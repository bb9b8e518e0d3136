//! Re-emit a report in the same line grammar the parser reads.
//!
//! Feeding the output back through the parser reproduces the covergroup,
//! coverpoint and bin structure, hit counts, covered flags and coverage
//! numbers. Cross-coverage groups have no line form and are not emitted.

use super::classify::{COVERED_STATUS, UNCOVERED_STATUS};
use super::types::{Bin, CoverageReport, Covergroup};
use std::fmt::Write;

pub fn emit_report(report: &CoverageReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &CoverageReport) -> std::fmt::Result {
    writeln!(out, "Overall Coverage: {}%", decimal(report.overall_coverage))?;
    for group in &report.covergroups {
        write_covergroup(out, group)?;
    }
    Ok(())
}

fn write_covergroup(out: &mut String, group: &Covergroup) -> std::fmt::Result {
    let (covered, total) = group
        .coverpoints
        .iter()
        .flat_map(|cp| &cp.bins)
        .fold((0usize, 0usize), |(c, t), bin| (c + usize::from(bin.covered), t + 1));

    writeln!(out, "Covergroup: {}", group.name)?;
    writeln!(
        out,
        "  Coverage: {}% ({}/{} bins)",
        decimal(group.coverage),
        covered,
        total
    )?;
    for point in &group.coverpoints {
        writeln!(out, "  Coverpoint: {}", point.name)?;
        for bin in &point.bins {
            write_bin(out, bin)?;
        }
    }
    Ok(())
}

fn write_bin(out: &mut String, bin: &Bin) -> std::fmt::Result {
    let status = if bin.covered {
        COVERED_STATUS
    } else {
        UNCOVERED_STATUS
    };
    writeln!(
        out,
        "    bin {}{} hits: {} {}",
        bin.name, bin.range, bin.hits, status
    )
}

/// Shortest round-tripping form that always carries a decimal point, so the
/// percentage pattern recognizes it.
fn decimal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
