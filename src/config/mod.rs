//! Configuration loaded from `.covgap.toml`.
//!
//! Every section is optional and every field has a default, so an empty file
//! (or no file) yields the documented behavior.
//!
//! ```toml
//! [parser]
//! design = "dma_controller"
//!
//! [scoring.weights]
//! impact = 0.4
//! difficulty = 0.3
//! dependency = 0.3
//!
//! [retry]
//! max_attempts = 3
//!
//! [excerpt]
//! max_uncovered = 4
//! ```

mod loader;
pub mod retry;
pub mod scoring;

use serde::{Deserialize, Serialize};

pub use loader::{
    directory_ancestors, load_config, load_config_from_dir, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use retry::{RetryConfig, RetryStrategy};
pub use scoring::{
    DependencyScores, DifficultyTable, ImpactTable, ScoringConfig, ScoringWeights,
};

pub use crate::report::{ExcerptLimits, ParseOptions};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CovgapConfig {
    #[serde(default)]
    pub parser: ParseOptions,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub excerpt: ExcerptLimits,
}
