//! Time types and the leap-adjusted day count used for option maturities.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DateFormat`: The single configurable format for string-encoded dates
//! - `LeapAdjustedDayCount`: Actual days / (365 or 366 depending on a reference year)
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, LeapAdjustedDayCount};
//!
//! let start = Date::from_ymd(2023, 11, 23).unwrap();
//! let end = Date::from_ymd(2024, 5, 10).unwrap();
//!
//! // 169 days over a 365-day reference year
//! let yf = LeapAdjustedDayCount::for_year(2023).year_fraction(start, end);
//! assert!((yf - 0.463).abs() < 0.0005);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and standard date arithmetic.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        Self::parse_with_format(s, &DateFormat::iso())
    }

    /// Parses a date using the given format.
    ///
    /// Surrounding whitespace is ignored. On failure the error carries the
    /// offending string and the human-readable expected format.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::{Date, DateFormat};
    ///
    /// let format = DateFormat::default();
    /// let date = Date::parse_with_format("10-05-2023", &format).unwrap();
    /// assert_eq!(date, Date::from_ymd(2023, 5, 10).unwrap());
    ///
    /// let err = Date::parse_with_format("2023-05-10", &format).unwrap_err();
    /// assert!(err.to_string().contains("DD-MM-YYYY"));
    ///
    /// // two-digit years are not widened
    /// assert!(Date::parse_with_format("23-11-22", &format).is_err());
    /// ```
    pub fn parse_with_format(s: &str, format: &DateFormat) -> Result<Self, DateError> {
        let text = s.trim();
        let parse_error = || DateError::ParseError {
            value: s.to_string(),
            format: format.label(),
        };
        let date = NaiveDate::parse_from_str(text, format.pattern())
            .map(Date)
            .map_err(|_| parse_error())?;
        // chrono's %Y takes any digit count and a sign; only canonical text is accepted
        if date.format_with(format) != text {
            return Err(parse_error());
        }
        Ok(date)
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Formats the date with the given format.
    pub fn format_with(&self, format: &DateFormat) -> String {
        self.0.format(format.pattern()).to_string()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Format for string-encoded dates.
///
/// Wraps a chrono format pattern. Can be built from either the chrono
/// pattern (`%d-%m-%Y`) or the display label (`DD-MM-YYYY`). The default
/// is `DD-MM-YYYY`, the format market-rate files and contract records use.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::DateFormat;
///
/// let by_label: DateFormat = "DD-MM-YYYY".parse().unwrap();
/// let by_pattern: DateFormat = "%d-%m-%Y".parse().unwrap();
/// assert_eq!(by_label, by_pattern);
/// assert_eq!(by_label, DateFormat::default());
/// assert_eq!(by_label.label(), "DD-MM-YYYY");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DateFormat(String);

/// Label tokens and their chrono equivalents, longest first.
const FORMAT_TOKENS: [(&str, &str); 3] = [("YYYY", "%Y"), ("MM", "%m"), ("DD", "%d")];

impl DateFormat {
    /// Creates a format from a chrono pattern such as `%d-%m-%Y`.
    pub fn new(pattern: impl Into<String>) -> Self {
        DateFormat(pattern.into())
    }

    /// ISO 8601 (`YYYY-MM-DD`).
    pub fn iso() -> Self {
        DateFormat::new("%Y-%m-%d")
    }

    /// Returns the chrono pattern.
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Returns the human-readable label used in error messages.
    pub fn label(&self) -> String {
        FORMAT_TOKENS
            .iter()
            .fold(self.0.clone(), |acc, (label, pattern)| {
                acc.replace(pattern, label)
            })
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::new("%d-%m-%Y")
    }
}

impl FromStr for DateFormat {
    type Err = String;

    /// Parses either a chrono pattern or a `DD`/`MM`/`YYYY` label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('%') {
            return Ok(DateFormat::new(s));
        }
        let pattern = FORMAT_TOKENS
            .iter()
            .fold(s.to_string(), |acc, (label, pattern)| {
                acc.replace(label, pattern)
            });
        if !pattern.contains('%') {
            return Err(format!("Unknown date format: {}", s));
        }
        Ok(DateFormat(pattern))
    }
}

impl TryFrom<String> for DateFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.label()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns true if `year` is a Gregorian leap year.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Actual-day count over a 365- or 366-day year.
///
/// The denominator is 366 when the reference year is a leap year, 365
/// otherwise. The reference year is the calendar year at valuation time
/// (`current()`), not the year of either contract date; pin it with
/// `for_year` for reproducible results.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, LeapAdjustedDayCount};
///
/// let start = Date::from_ymd(2022, 11, 23).unwrap();
/// let end = Date::from_ymd(2023, 5, 10).unwrap();
///
/// let regular = LeapAdjustedDayCount::for_year(2023);
/// assert_eq!(regular.days_in_year(), 365);
/// assert!((regular.year_fraction(start, end) - 168.0 / 365.0).abs() < 1e-12);
///
/// let leap = LeapAdjustedDayCount::for_year(2024);
/// assert_eq!(leap.days_in_year(), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapAdjustedDayCount {
    reference_year: i32,
}

impl LeapAdjustedDayCount {
    /// Uses today's calendar year as the reference year.
    pub fn current() -> Self {
        Self::for_year(Date::today().year())
    }

    /// Uses an explicit reference year.
    pub fn for_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Returns the reference year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Returns 366 for a leap reference year, 365 otherwise.
    pub fn days_in_year(&self) -> u32 {
        365 + u32::from(is_leap_year(self.reference_year))
    }

    /// Year fraction between two dates.
    ///
    /// Negative when `start` is after `end`.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        (end - start) as f64 / f64::from(self.days_in_year())
    }
}

impl Default for LeapAdjustedDayCount {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for LeapAdjustedDayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ACT/{} ({})", self.days_in_year(), self.reference_year)
    }
}
