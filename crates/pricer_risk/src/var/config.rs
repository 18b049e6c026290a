//! VaR configuration.

use crate::error::RiskError;

/// Default holding horizon, in observations.
pub const DEFAULT_HORIZON: usize = 1;

/// Configuration for [`VarEngine`](super::VarEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarConfig {
    /// Holding horizon in observation steps
    horizon: usize,
}

impl Default for VarConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl VarConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    /// `RiskError::InvalidHorizon` if `horizon` is zero.
    pub fn new(horizon: usize) -> Result<Self, RiskError> {
        if horizon == 0 {
            return Err(RiskError::InvalidHorizon { horizon });
        }
        Ok(Self { horizon })
    }

    /// Holding horizon.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// √horizon, the square-root-of-time scaling factor.
    #[inline]
    pub fn time_scaling(&self) -> f64 {
        (self.horizon as f64).sqrt()
    }
}
