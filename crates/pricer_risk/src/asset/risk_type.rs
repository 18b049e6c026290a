//! Supported risk types.

use std::fmt;
use std::str::FromStr;

use crate::error::RiskError;

/// Risk factor an asset is exposed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RiskType {
    /// Foreign-exchange rate risk.
    #[cfg_attr(feature = "serde", serde(rename = "FX"))]
    Fx,
}

impl RiskType {
    /// All supported risk types.
    pub const SUPPORTED: [RiskType; 1] = [RiskType::Fx];

    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::Fx => "FX",
        }
    }

    fn supported_list() -> String {
        Self::SUPPORTED
            .iter()
            .map(RiskType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for RiskType {
    type Err = RiskError;

    /// Parses a tag case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use pricer_risk::asset::RiskType;
    ///
    /// assert_eq!("fx".parse::<RiskType>().unwrap(), RiskType::Fx);
    /// assert!("IR".parse::<RiskType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FX" => Ok(RiskType::Fx),
            _ => Err(RiskError::UnsupportedRiskType {
                risk_type: s.to_string(),
                supported: Self::supported_list(),
            }),
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("FX".parse::<RiskType>().unwrap(), RiskType::Fx);
        assert_eq!(" Fx ".parse::<RiskType>().unwrap(), RiskType::Fx);
    }

    #[test]
    fn test_interest_rate_is_unsupported() {
        let err = "IR".parse::<RiskType>().unwrap_err();
        assert_eq!(
            err,
            RiskError::UnsupportedRiskType {
                risk_type: "IR".to_string(),
                supported: "FX".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskType::Fx.to_string(), "FX");
    }
}
