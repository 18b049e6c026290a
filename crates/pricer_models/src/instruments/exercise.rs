//! Option exercise style definitions.

use std::fmt;

/// Option exercise style.
///
/// Only European contracts can be priced with the closed-form formulas;
/// American contracts are representable so that requests for them fail
/// with a clear error instead of being mispriced.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert!(ExerciseStyle::from(true).is_european());
/// assert_eq!(ExerciseStyle::from(false), ExerciseStyle::American);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    #[default]
    European,

    /// Exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns true for European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns the style name.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "European",
            ExerciseStyle::American => "American",
        }
    }
}

impl From<bool> for ExerciseStyle {
    /// Maps an `is_european` flag onto a style.
    fn from(is_european: bool) -> Self {
        if is_european {
            ExerciseStyle::European
        } else {
            ExerciseStyle::American
        }
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_european() {
        assert_eq!(ExerciseStyle::default(), ExerciseStyle::European);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExerciseStyle::European.to_string(), "European");
        assert_eq!(ExerciseStyle::American.to_string(), "American");
    }
}
