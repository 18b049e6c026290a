//! Market-rate inputs.
//!
//! - [`RawTable`]: untyped rows handed over by an ingestion front-end
//! - [`DatedSeries`]: typed `(date, value)` observations, newest first

mod series;
mod table;

pub use series::DatedSeries;
pub use table::{RawCell, RawTable};
