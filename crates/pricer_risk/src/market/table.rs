//! Raw market-rate table as delivered by an ingestion front-end.

use std::borrow::Cow;
use std::fmt;

use pricer_core::types::Date;

use crate::error::RiskError;

/// One cell of a raw table.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Already a calendar date.
    Date(Date),
    /// Already numeric.
    Number(f64),
    /// Unparsed text.
    Text(String),
}

impl RawCell {
    /// Cell content as text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawCell::Date(date) => Cow::Owned(date.to_string()),
            RawCell::Number(value) => Cow::Owned(value.to_string()),
            RawCell::Text(text) => Cow::Borrowed(text.as_str()),
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for RawCell {
    fn from(text: &str) -> Self {
        RawCell::Text(text.to_string())
    }
}

impl From<String> for RawCell {
    fn from(text: String) -> Self {
        RawCell::Text(text)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<Date> for RawCell {
    fn from(date: Date) -> Self {
        RawCell::Date(date)
    }
}

/// Rectangular table of named columns.
///
/// Rows are guaranteed to be as wide as the header and column names are unique.
///
/// # Examples
/// ```
/// use pricer_risk::market::{RawCell, RawTable};
///
/// let table = RawTable::new(
///     vec!["date".into(), "asset_id".into(), "rate".into()],
///     vec![vec!["02-01-2023".into(), "ccy-1".into(), "1,0512".into()]],
/// )
/// .unwrap();
/// assert_eq!(table.column_index("rate"), Some(2));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Creates a table, checking header uniqueness and row widths.
    ///
    /// # Errors
    /// - `RiskError::DuplicateColumn` if a header name repeats
    /// - `RiskError::RowWidthMismatch` if a row is not as wide as the header
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Result<Self, RiskError> {
        for (i, header) in headers.iter().enumerate() {
            if headers[..i].contains(header) {
                return Err(RiskError::DuplicateColumn {
                    column: header.clone(),
                });
            }
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != headers.len() {
                return Err(RiskError::RowWidthMismatch {
                    row,
                    expected: headers.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Column names in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Position of a column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Fails with every absent column among `required`.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), RiskError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RiskError::MissingColumns { missing })
        }
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[RawCell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
