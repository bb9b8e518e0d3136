//! Caller-side retry loop around a single suggestion request.

use super::prompt::SuggestionRequest;
use super::{AdvisorError, SuggestionProvider};
use crate::config::RetryConfig;
use crate::prioritize::SuggestionBatch;
use std::time::Duration;

/// Request suggestions, sleeping the current thread between attempts.
pub fn request_suggestions<P>(
    provider: &P,
    request: &SuggestionRequest,
    retry: &RetryConfig,
) -> Result<SuggestionBatch, AdvisorError>
where
    P: SuggestionProvider + ?Sized,
{
    request_suggestions_with_sleeper(provider, request, retry, std::thread::sleep)
}

/// Request suggestions with an injected sleep function.
///
/// Rate-limit and transient failures are retried until
/// `retry.effective_attempts()` attempts have been made. A fatal failure
/// ends the loop immediately. No sleep follows the final attempt.
pub fn request_suggestions_with_sleeper<P, S>(
    provider: &P,
    request: &SuggestionRequest,
    retry: &RetryConfig,
    mut sleep: S,
) -> Result<SuggestionBatch, AdvisorError>
where
    P: SuggestionProvider + ?Sized,
    S: FnMut(Duration),
{
    let attempts = retry.effective_attempts();
    let mut attempt = 1;

    loop {
        match provider.generate(request) {
            Ok(batch) => {
                tracing::debug!(
                    attempt,
                    suggestions = batch.suggestions.len(),
                    "suggestions received"
                );
                return Ok(batch);
            }
            Err(err) if !err.is_retryable() => return Err(AdvisorError::Fatal(err)),
            Err(err) if retry.should_retry(attempt) => {
                let delay = retry.delay_for_attempt(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "suggestion request failed, retrying"
                );
                sleep(delay);
                attempt += 1;
            }
            Err(last) => {
                return Err(AdvisorError::Exhausted {
                    attempts: attempt,
                    last,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::ProviderError;
    use crate::prioritize::Suggestion;
    use crate::report::CoverageReport;
    use std::cell::{Cell, RefCell};

    /// Replays a fixed script of responses, one per call.
    struct Scripted {
        script: RefCell<Vec<Result<SuggestionBatch, ProviderError>>>,
        calls: Cell<u32>,
    }

    impl Scripted {
        fn new(mut script: Vec<Result<SuggestionBatch, ProviderError>>) -> Self {
            script.reverse();
            Self {
                script: RefCell::new(script),
                calls: Cell::new(0),
            }
        }
    }

    impl SuggestionProvider for Scripted {
        fn generate(
            &self,
            _request: &SuggestionRequest,
        ) -> Result<SuggestionBatch, ProviderError> {
            self.calls.set(self.calls.get() + 1);
            self.script
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(ProviderError::Fatal("script exhausted".into())))
        }
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            design: "dut".into(),
            context: CoverageReport::new("dut"),
            prompt: String::new(),
        }
    }

    fn batch() -> SuggestionBatch {
        SuggestionBatch {
            suggestions: vec![Suggestion::new("cg.cp.b", "High", "Easy")],
        }
    }

    fn rate_limited() -> Result<SuggestionBatch, ProviderError> {
        Err(ProviderError::RateLimited("quota".into()))
    }

    #[test]
    fn test_success_first_try_never_sleeps() {
        let provider = Scripted::new(vec![Ok(batch())]);
        let mut slept = Vec::new();
        let got = request_suggestions_with_sleeper(
            &provider,
            &request(),
            &RetryConfig::default(),
            |d| slept.push(d),
        )
        .unwrap();
        assert_eq!(got, batch());
        assert!(slept.is_empty());
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_rate_limit_then_success() {
        let provider = Scripted::new(vec![rate_limited(), Ok(batch())]);
        let mut slept = Vec::new();
        let got = request_suggestions_with_sleeper(
            &provider,
            &request(),
            &RetryConfig::default(),
            |d| slept.push(d),
        );
        assert!(got.is_ok());
        assert_eq!(slept, vec![Duration::from_secs(60)]);
    }

    #[test]
    fn test_exhausted_after_max_attempts() {
        let provider = Scripted::new(vec![rate_limited(), rate_limited(), rate_limited()]);
        let mut sleeps = 0;
        let err = request_suggestions_with_sleeper(
            &provider,
            &request(),
            &RetryConfig::default(),
            |_| sleeps += 1,
        )
        .unwrap_err();

        assert!(matches!(err, AdvisorError::Exhausted { attempts: 3, .. }));
        assert_eq!(sleeps, 2);
        assert_eq!(provider.calls.get(), 3);
    }

    #[test]
    fn test_fatal_stops_immediately() {
        let provider = Scripted::new(vec![
            Err(ProviderError::Fatal("bad key".into())),
            Ok(batch()),
        ]);
        let err = request_suggestions_with_sleeper(
            &provider,
            &request(),
            &RetryConfig::default(),
            |_| panic!("must not sleep"),
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::Fatal(_)));
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_disabled_retry_single_attempt() {
        let provider = Scripted::new(vec![
            Err(ProviderError::Transient("reset".into())),
            Ok(batch()),
        ]);
        let err = request_suggestions_with_sleeper(
            &provider,
            &request(),
            &RetryConfig::disabled(),
            |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::Exhausted { attempts: 1, .. }));
    }
}
