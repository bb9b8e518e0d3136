//! Request construction for the suggestion collaborator.

use crate::errors::Result;
use crate::report::{CoverageReport, ExcerptLimits};
use serde::Serialize;

/// Everything a suggestion service needs for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRequest {
    pub design: String,
    /// Report (usually an excerpt) the prompt embeds
    pub context: CoverageReport,
    pub prompt: String,
}

/// Render the expert prompt embedding the report as pretty JSON.
pub fn build_prompt(report: &CoverageReport) -> Result<String> {
    let context = serde_json::to_string_pretty(report)?;
    Ok(format!(
        "You are a Silicon Verification Expert.\n\
         Below is a Functional Coverage Report for a {design}.\n\
         \n\
         CONTEXT:\n\
         {context}\n\
         \n\
         TASK:\n\
         1. Analyze the uncovered_bins and cross_coverage gaps.\n\
         2. Generate specific test scenarios to close these gaps.\n\
         3. For each suggestion, provide priority, difficulty, and a technical test outline.\n",
        design = report.design,
    ))
}

/// Cut the report down to `limits` and build the request around it.
pub fn build_request(report: &CoverageReport, limits: &ExcerptLimits) -> Result<SuggestionRequest> {
    let context = report.excerpt(limits);
    let prompt = build_prompt(&context)?;
    Ok(SuggestionRequest {
        design: context.design.clone(),
        context,
        prompt,
    })
}
