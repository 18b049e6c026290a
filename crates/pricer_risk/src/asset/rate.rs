//! Market-rate cell normalisation and precision checks.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::RiskError;

/// What to do when string rates of one asset carry different decimal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrecisionPolicy {
    /// Skip the check.
    Ignore,
    /// Log a warning.
    #[default]
    Warn,
    /// Fail asset construction.
    Reject,
}

impl PrecisionPolicy {
    /// Returns the policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecisionPolicy::Ignore => "ignore",
            PrecisionPolicy::Warn => "warn",
            PrecisionPolicy::Reject => "reject",
        }
    }

    /// Applies the policy to the decimal counts observed for `asset`.
    pub(crate) fn check(&self, asset: &str, decimals: &[usize]) -> Result<(), RiskError> {
        if *self == PrecisionPolicy::Ignore {
            return Ok(());
        }
        let (Some(&min), Some(&max)) = (decimals.iter().min(), decimals.iter().max()) else {
            return Ok(());
        };
        if min == max {
            return Ok(());
        }
        match self {
            PrecisionPolicy::Reject => Err(RiskError::InconsistentPrecision {
                asset: asset.to_string(),
                min,
                max,
            }),
            _ => {
                warn!(asset, min, max, "market rates have inconsistent decimal precision");
                Ok(())
            }
        }
    }
}

impl FromStr for PrecisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(PrecisionPolicy::Ignore),
            "warn" => Ok(PrecisionPolicy::Warn),
            "reject" => Ok(PrecisionPolicy::Reject),
            _ => Err(format!(
                "Invalid precision policy: {}. Expected one of: ignore, warn, reject",
                s
            )),
        }
    }
}

impl fmt::Display for PrecisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalises a textual rate to dot-decimal notation.
///
/// A comma is the decimal separator. Dots before the last comma are
/// thousands separators and are removed. A dot after a comma leaves the
/// text as it is, so it fails to parse.
pub(crate) fn normalise_decimal(text: &str) -> String {
    let trimmed = text.trim();
    match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if dot > comma => trimmed.to_string(),
        (Some(_), _) => trimmed.replace('.', "").replace(',', "."),
        (None, _) => trimmed.to_string(),
    }
}

/// Number of digits after the decimal point of a normalised rate.
pub(crate) fn decimal_places(normalised: &str) -> usize {
    normalised
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0)
}
