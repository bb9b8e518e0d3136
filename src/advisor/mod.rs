//! Seam to the external suggestion collaborator.
//!
//! The parser and ranker never talk to a suggestion service. An orchestrator
//! builds a [`SuggestionRequest`] from a parsed report, hands it to an
//! injected [`SuggestionProvider`] under a caller-chosen [`RetryConfig`], and
//! ranks whatever comes back.
//!
//! ```rust
//! use covgap::advisor::{build_request, request_suggestions, ProviderError, SuggestionProvider, SuggestionRequest};
//! use covgap::config::RetryConfig;
//! use covgap::prioritize::{rank, Suggestion, SuggestionBatch};
//! use covgap::report::{parse_report, ExcerptLimits};
//!
//! struct Canned;
//!
//! impl SuggestionProvider for Canned {
//!     fn generate(&self, _request: &SuggestionRequest) -> Result<SuggestionBatch, ProviderError> {
//!         Ok(SuggestionBatch { suggestions: vec![Suggestion::new("cg.cp.big", "High", "Hard")] })
//!     }
//! }
//!
//! let report = parse_report("Covergroup: cg\nCoverpoint: cp\nbin big hits: 0 UNCOVERED\n")?;
//! let request = build_request(&report, &ExcerptLimits::default())?;
//! let batch = request_suggestions(&Canned, &request, &RetryConfig::default())?;
//! let ranked = rank(batch.suggestions);
//! assert_eq!(ranked[0].priority_score, 4.4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`RetryConfig`]: crate::config::RetryConfig

pub mod prompt;
pub mod retry;

use crate::prioritize::SuggestionBatch;
use thiserror::Error;

pub use prompt::{build_prompt, build_request, SuggestionRequest};
pub use retry::{request_suggestions, request_suggestions_with_sleeper};

/// A service that turns a request into suggestion records.
pub trait SuggestionProvider {
    fn generate(&self, request: &SuggestionRequest) -> Result<SuggestionBatch, ProviderError>;
}

/// Failure reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Quota or rate limit hit; worth waiting and retrying
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Connection or server hiccup; worth retrying
    #[error("transient failure: {0}")]
    Transient(String),

    /// Bad credentials, rejected request or unusable response
    #[error("fatal failure: {0}")]
    Fatal(String),
}

impl ProviderError {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Fatal(_))
    }
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("suggestion request failed after {attempts} attempt(s): {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: ProviderError,
    },

    #[error("suggestion request aborted: {0}")]
    Fatal(#[source] ProviderError),
}
