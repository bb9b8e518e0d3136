//! Scoring configuration for suggestion prioritization
//!
//! This module contains:
//! - Weights for the three sub-scores (impact, inverse difficulty, dependency)
//! - The impact table keyed by priority
//! - The divisor table keyed by difficulty
//! - The dependency-freedom scores

use serde::{Deserialize, Serialize};

/// Scoring weights configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the impact sub-score (0.0-1.0)
    #[serde(default = "default_impact_weight")]
    pub impact: f64,

    /// Weight for the inverse-difficulty sub-score (0.0-1.0)
    #[serde(default = "default_difficulty_weight")]
    pub difficulty: f64,

    /// Weight for the dependency-freedom sub-score (0.0-1.0)
    #[serde(default = "default_dependency_weight")]
    pub dependency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            impact: default_impact_weight(),
            difficulty: default_difficulty_weight(),
            dependency: default_dependency_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    /// Validate ranges and that weights sum to 1.0 (with small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.impact, "Impact")?;
        Self::validate_weight(self.difficulty, "Difficulty")?;
        Self::validate_weight(self.dependency, "Dependency")?;

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights (impact, difficulty, dependency) must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }

    /// Normalize weights to ensure they sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.impact /= sum;
            self.difficulty /= sum;
            self.dependency /= sum;
        }
    }

    fn sum(&self) -> f64 {
        self.impact + self.difficulty + self.dependency
    }
}

/// Impact per priority label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactTable {
    #[serde(default = "default_high_impact")]
    pub high: f64,
    #[serde(default = "default_medium_impact")]
    pub medium: f64,
    #[serde(default = "default_low_impact")]
    pub low: f64,
    /// Used for labels outside High/Medium/Low
    #[serde(default = "default_medium_impact")]
    pub unknown: f64,
}

impl Default for ImpactTable {
    fn default() -> Self {
        Self {
            high: default_high_impact(),
            medium: default_medium_impact(),
            low: default_low_impact(),
            unknown: default_medium_impact(),
        }
    }
}

/// Divisor per difficulty label; the sub-score is `1 / divisor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTable {
    #[serde(default = "default_easy_divisor")]
    pub easy: f64,
    #[serde(default = "default_medium_divisor")]
    pub medium: f64,
    #[serde(default = "default_hard_divisor")]
    pub hard: f64,
    /// Used for `Low` and labels outside Easy/Medium/Hard
    #[serde(default = "default_medium_divisor")]
    pub unknown: f64,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: default_easy_divisor(),
            medium: default_medium_divisor(),
            hard: default_hard_divisor(),
            unknown: default_medium_divisor(),
        }
    }
}

impl DifficultyTable {
    /// Every divisor must be strictly positive
    pub fn validate(&self) -> Result<(), String> {
        [
            (self.easy, "easy"),
            (self.medium, "medium"),
            (self.hard, "hard"),
            (self.unknown, "unknown"),
        ]
        .into_iter()
        .find(|(divisor, _)| !(*divisor > 0.0))
        .map_or(Ok(()), |(divisor, name)| {
            Err(format!("{} difficulty divisor must be positive, got {}", name, divisor))
        })
    }
}

/// Dependency-freedom sub-score: binary, not scaled by count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DependencyScores {
    #[serde(default = "default_independent_score")]
    pub independent: f64,
    #[serde(default = "default_dependent_score")]
    pub dependent: f64,
}

impl Default for DependencyScores {
    fn default() -> Self {
        Self {
            independent: default_independent_score(),
            dependent: default_dependent_score(),
        }
    }
}

/// Full `[scoring]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub impact: ImpactTable,
    #[serde(default)]
    pub difficulty: DifficultyTable,
    #[serde(default)]
    pub dependency: DependencyScores,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.difficulty.validate()
    }
}

// Default weights: impact dominates, effort and independence split the rest
pub fn default_impact_weight() -> f64 {
    0.4
}
pub fn default_difficulty_weight() -> f64 {
    0.3
}
pub fn default_dependency_weight() -> f64 {
    0.3
}

pub fn default_high_impact() -> f64 {
    10.0
}
pub fn default_medium_impact() -> f64 {
    5.0
}
pub fn default_low_impact() -> f64 {
    2.0
}

pub fn default_easy_divisor() -> f64 {
    1.0
}
pub fn default_medium_divisor() -> f64 {
    2.0
}
pub fn default_hard_divisor() -> f64 {
    3.0
}

pub fn default_independent_score() -> f64 {
    1.0
}
pub fn default_dependent_score() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weights_out_of_range() {
        let weights = ScoringWeights {
            impact: 1.5,
            difficulty: -0.25,
            dependency: -0.25,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("Impact"), "got: {err}");
    }

    #[test]
    fn test_weights_bad_sum() {
        let weights = ScoringWeights {
            impact: 0.5,
            difficulty: 0.5,
            dependency: 0.5,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("1.500"), "got: {err}");
    }

    #[test]
    fn test_normalize() {
        let mut weights = ScoringWeights {
            impact: 0.8,
            difficulty: 0.6,
            dependency: 0.6,
        };
        weights.normalize();
        assert!((weights.impact - 0.4).abs() < 1e-9);
        assert!((weights.difficulty - 0.3).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let table = DifficultyTable {
            hard: 0.0,
            ..Default::default()
        };
        assert!(table.validate().unwrap_err().contains("hard"));
    }

    #[test]
    fn test_partial_toml_section() {
        let config: ScoringConfig = toml::from_str(
            r#"
            [impact]
            high = 20.0
            "#,
        )
        .unwrap();
        assert_eq!(config.impact.high, 20.0);
        assert_eq!(config.impact.unknown, 5.0);
        assert_eq!(config.weights, ScoringWeights::default());
    }
}
