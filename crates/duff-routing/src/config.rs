//! Redistribution parameters and their validating builder.

use duff_terrain::ZoneDefaults;
use std::fmt;

/// Default near-zero threshold for area and mean divisions.
///
/// A total, donor, or receiver area at or below this value is treated
/// as empty, and the corresponding mean or share is defined as zero
/// instead of computed.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Parameters of a redistribution pass.
///
/// Built through [`SharingConfig::builder`] or taken from a zone's
/// validated defaults via [`SharingConfig::from_defaults`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharingConfig {
    transfer_efficiency: f64,
    epsilon: f64,
}

impl SharingConfig {
    /// Create a new builder with full efficiency and the default
    /// epsilon threshold.
    pub fn builder() -> SharingConfigBuilder {
        SharingConfigBuilder {
            transfer_efficiency: 1.0,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Build a config from a zone's default parameter set.
    ///
    /// Infallible: `ZoneDefaults` already constrains the coefficient
    /// to `[0, 1]` at construction.
    pub fn from_defaults(defaults: &ZoneDefaults) -> Self {
        Self {
            transfer_efficiency: defaults.sh_litter(),
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Fraction of collected excess that actually crosses patch
    /// boundaries, in `[0, 1]`.
    pub fn transfer_efficiency(&self) -> f64 {
        self.transfer_efficiency
    }

    /// Near-zero threshold guarding area divisions.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// Builder for [`SharingConfig`].
pub struct SharingConfigBuilder {
    transfer_efficiency: f64,
    epsilon: f64,
}

impl SharingConfigBuilder {
    /// Set the transfer-efficiency coefficient (default 1.0).
    /// Must be in `[0, 1]`.
    pub fn transfer_efficiency(mut self, coefficient: f64) -> Self {
        self.transfer_efficiency = coefficient;
        self
    }

    /// Set the near-zero area threshold (default [`DEFAULT_EPSILON`]).
    /// Must be finite and strictly positive.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Build the config, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the coefficient is NaN or outside `[0, 1]`, or
    /// the epsilon is non-finite or not strictly positive.
    pub fn build(self) -> Result<SharingConfig, ConfigError> {
        if !(0.0..=1.0).contains(&self.transfer_efficiency) {
            return Err(ConfigError::EfficiencyOutOfRange(self.transfer_efficiency));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::EpsilonNotPositive(self.epsilon));
        }
        Ok(SharingConfig {
            transfer_efficiency: self.transfer_efficiency,
            epsilon: self.epsilon,
        })
    }
}

/// Errors detected while building a [`SharingConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The transfer-efficiency coefficient is NaN or outside `[0, 1]`.
    EfficiencyOutOfRange(f64),
    /// The epsilon threshold is non-finite or not strictly positive.
    EpsilonNotPositive(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EfficiencyOutOfRange(v) => {
                write!(f, "transfer efficiency {v} outside [0, 1]")
            }
            Self::EpsilonNotPositive(v) => {
                write!(f, "epsilon {v} must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
