//! Date-indexed numeric series.

use std::collections::BTreeMap;

use pricer_core::types::Date;

/// Sequence of `(date, value)` observations ordered newest first.
///
/// Duplicate dates are allowed and keep their relative input order.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_risk::market::DatedSeries;
///
/// let d = |day| Date::from_ymd(2023, 1, day).unwrap();
/// let series = DatedSeries::new(vec![(d(2), 1.0), (d(4), 4.0), (d(3), 2.0)]);
/// assert_eq!(series.values().collect::<Vec<_>>(), vec![4.0, 2.0, 1.0]);
///
/// let ratios = series.shifted_ratio(1);
/// assert_eq!(ratios.values().collect::<Vec<_>>(), vec![2.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatedSeries {
    points: Vec<(Date, f64)>,
}

impl DatedSeries {
    /// Creates a series, sorting the points by descending date.
    pub fn new(mut points: Vec<(Date, f64)>) -> Self {
        points.sort_by(|a, b| b.0.cmp(&a.0));
        Self { points }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observations, newest first.
    pub fn points(&self) -> &[(Date, f64)] {
        &self.points
    }

    /// Dates, newest first.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.points.iter().map(|&(date, _)| date)
    }

    /// Values, newest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, value)| value)
    }

    /// Ratio of each observation to the one `horizon` steps older.
    ///
    /// The result is keyed by the newer date; the oldest `horizon`
    /// observations have no partner and are dropped.
    pub fn shifted_ratio(&self, horizon: usize) -> DatedSeries {
        let points = self
            .points
            .iter()
            .zip(self.points.iter().skip(horizon))
            .map(|(&(date, newer), &(_, older))| (date, newer / older))
            .collect();
        DatedSeries { points }
    }

    /// Applies `f` to every value, keeping the dates.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> DatedSeries {
        DatedSeries {
            points: self
                .points
                .iter()
                .map(|&(date, value)| (date, f(value)))
                .collect(),
        }
    }

    /// Outer join on date, summing the values that share a date.
    pub fn sum_by_date<'a>(series: impl IntoIterator<Item = &'a DatedSeries>) -> DatedSeries {
        let mut totals: BTreeMap<Date, f64> = BTreeMap::new();
        for s in series {
            for &(date, value) in &s.points {
                *totals.entry(date).or_insert(0.0) += value;
            }
        }
        DatedSeries {
            points: totals.into_iter().rev().collect(),
        }
    }

    /// Values sorted ascending.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.values().collect();
        values.sort_by(f64::total_cmp);
        values
    }
}

impl FromIterator<(Date, f64)> for DatedSeries {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        DatedSeries::new(iter.into_iter().collect())
    }
}
