//! Mining configuration and validation.
//!
//! The ranker and the acceptance check compare supports against the same
//! minimum but with different operators: ranking keeps items whose support
//! *exceeds* the minimum, acceptance reports cones whose support is *at
//! least* the minimum. Both comparisons are carried as separate
//! [`Threshold`] values so neither can silently follow the other.
//!
//! # Example
//!
//! ```
//! use simplicial::config::{MiningConfig, Threshold};
//!
//! let config = MiningConfig::new(2)
//!     .unwrap()
//!     .with_acceptance(Threshold::Exceeds)
//!     .with_parallel(true);
//! assert_eq!(config.min_support, 2);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};

/// Comparison applied between an observed support and the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// `support >= min`
    AtLeast,
    /// `support > min`
    Exceeds,
}

impl Threshold {
    #[inline]
    pub fn admits(self, support: usize, min_support: usize) -> bool {
        match self {
            Threshold::AtLeast => support >= min_support,
            Threshold::Exceeds => support > min_support,
        }
    }
}

/// Miner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum number of co-occurring transactions.
    pub min_support: usize,
    /// Comparison used when pruning items before ranking.
    pub rank_filter: Threshold,
    /// Comparison used when reporting a cone.
    pub acceptance: Threshold,
    /// Partition the traversal by base item across the rayon pool.
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            rank_filter: Threshold::Exceeds,
            acceptance: Threshold::AtLeast,
            parallel: false,
        }
    }
}

impl MiningConfig {
    /// Create a configuration with default comparisons.
    ///
    /// A non-positive minimum makes antimonotone pruning meaningless and is
    /// rejected.
    pub fn new(min_support: i64) -> Result<Self> {
        let min_support = validate_min_support(min_support)?;
        Ok(Self {
            min_support,
            ..Self::default()
        })
    }

    pub fn with_rank_filter(mut self, rank_filter: Threshold) -> Self {
        self.rank_filter = rank_filter;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Threshold) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport(0));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

pub(crate) fn validate_min_support(min_support: i64) -> Result<usize> {
    if min_support <= 0 {
        return Err(MiningError::InvalidMinSupport(min_support));
    }
    usize::try_from(min_support).map_err(|_| MiningError::InvalidMinSupport(min_support))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_comparisons_differ_at_boundary() {
        assert!(Threshold::AtLeast.admits(3, 3));
        assert!(!Threshold::Exceeds.admits(3, 3));
        assert!(Threshold::Exceeds.admits(4, 3));
        assert!(!Threshold::AtLeast.admits(2, 3));
    }

    #[test]
    fn test_rejects_non_positive_min_support() {
        assert!(matches!(
            MiningConfig::new(0),
            Err(MiningError::InvalidMinSupport(0))
        ));
        assert!(matches!(
            MiningConfig::new(-4),
            Err(MiningError::InvalidMinSupport(-4))
        ));
    }

    #[test]
    fn test_defaults_keep_asymmetric_thresholds() {
        let config = MiningConfig::new(5).unwrap();
        assert_eq!(config.min_support, 5);
        assert_eq!(config.rank_filter, Threshold::Exceeds);
        assert_eq!(config.acceptance, Threshold::AtLeast);
        assert!(!config.parallel);
    }

    #[test]
    fn test_json_partial_config() {
        let config = MiningConfig::from_json_str(r#"{"min_support": 3, "parallel": true}"#).unwrap();
        assert_eq!(config.min_support, 3);
        assert!(config.parallel);
        assert_eq!(config.acceptance, Threshold::AtLeast);

        let config =
            MiningConfig::from_json_str(r#"{"min_support": 2, "acceptance": "exceeds"}"#).unwrap();
        assert_eq!(config.acceptance, Threshold::Exceeds);
    }

    #[test]
    fn test_json_rejects_zero_support() {
        assert!(matches!(
            MiningConfig::from_json_str(r#"{"min_support": 0}"#),
            Err(MiningError::InvalidMinSupport(0))
        ));
        assert!(matches!(
            MiningConfig::from_json_str("not json"),
            Err(MiningError::Config(_))
        ));
    }
}
