//! Retry configuration for calls to the suggestion collaborator.
//!
//! Suggestion services throttle aggressively. The caller, not the parser or
//! the ranker, owns the retry policy: this section controls how many times a
//! request is attempted and how long to wait after a rate-limit or transient
//! failure.
//!
//! # Configuration Example
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_attempts = 3
//! base_delay_ms = 60000
//! strategy = "constant"
//! max_delay_ms = 300000
//! ```
//!
//! # Retry Strategies
//!
//! - **Constant**: Same delay after each failed attempt
//! - **Linear**: Delay increases linearly (base * attempt)
//! - **Exponential**: Delay doubles each attempt (base * 2^(attempt-1))

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration for the suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Enable retries; when false exactly one attempt is made (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Total attempts including the first one (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay after a failed attempt in milliseconds (default: 60000)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Delay growth strategy (default: constant)
    #[serde(default)]
    pub strategy: RetryStrategy,

    /// Upper bound for a single delay in milliseconds (default: 300000)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            strategy: RetryStrategy::default(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// A single attempt, no waiting.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Attempts that will actually be made.
    pub fn effective_attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Delay to wait after failed attempt `attempt` (1-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        let delay_ms = match self.strategy {
            RetryStrategy::Constant => self.base_delay_ms,
            RetryStrategy::Linear => self.base_delay_ms.saturating_mul(u64::from(attempt)),
            RetryStrategy::Exponential => {
                let factor = 1u64.checked_shl(attempt - 1).unwrap_or(u64::MAX);
                self.base_delay_ms.saturating_mul(factor)
            }
        };

        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }

    /// Whether another attempt follows failed attempt `attempt` (1-indexed).
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.effective_attempts()
    }
}

/// Retry delay strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    /// Same delay after each failure.
    #[default]
    Constant,
    /// Delay increases linearly: base * attempt.
    Linear,
    /// Delay doubles each attempt: base * 2^(attempt-1).
    Exponential,
}

// Default value functions for serde
fn default_enabled() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    60_000
}

fn default_max_delay_ms() -> u64 {
    300_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_config_default() {
        let config = RetryConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay_ms, 60_000);
        assert_eq!(config.strategy, RetryStrategy::Constant);
    }

    #[test]
    fn test_disabled_means_one_attempt() {
        let config = RetryConfig::disabled();
        assert_eq!(config.effective_attempts(), 1);
        assert!(!config.should_retry(1));
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let config = RetryConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_attempts(), 1);
    }

    #[test]
    fn test_constant_strategy_delay() {
        let config = RetryConfig {
            base_delay_ms: 100,
            ..Default::default()
        };
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(3), Duration::from_millis(100));
    }

    #[test]
    fn test_linear_strategy_delay() {
        let config = RetryConfig {
            strategy: RetryStrategy::Linear,
            base_delay_ms: 100,
            ..Default::default()
        };
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(3), Duration::from_millis(300));
    }

    #[test]
    fn test_exponential_strategy_delay() {
        let config = RetryConfig {
            strategy: RetryStrategy::Exponential,
            base_delay_ms: 100,
            ..Default::default()
        };
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(100)); // 100 * 2^0
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(200)); // 100 * 2^1
        assert_eq!(config.delay_for_attempt(3), Duration::from_millis(400)); // 100 * 2^2
    }

    #[test]
    fn test_delay_capped() {
        let config = RetryConfig {
            strategy: RetryStrategy::Exponential,
            base_delay_ms: 1_000,
            max_delay_ms: 5_000,
            ..Default::default()
        };
        assert_eq!(config.delay_for_attempt(10), Duration::from_millis(5_000));
        assert_eq!(config.delay_for_attempt(200), Duration::from_millis(5_000));
    }

    #[test]
    fn test_should_retry() {
        let config = RetryConfig::default();
        assert!(config.should_retry(1));
        assert!(config.should_retry(2));
        assert!(!config.should_retry(3));
    }

    #[test]
    fn test_toml_strategy_lowercase() {
        let config: RetryConfig = toml::from_str(r#"strategy = "exponential""#).unwrap();
        assert_eq!(config.strategy, RetryStrategy::Exponential);
        assert_eq!(config.max_attempts, 3);
    }
}
