use crate::Timed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time ordered series derived from a [`PriceSeries`](crate::prices::PriceSeries).
///
/// Missing entries (eg/ the head of a returns series) are represented by [`f64::NAN`].
///
/// Two [`TimeSeries`] are equal if they share the same index and values, where a missing entry
/// equals another missing entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TimeSeries(pub Vec<Timed<f64>>);

impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(left, right)| {
                left.time == right.time
                    && (left.value == right.value
                        || (left.value.is_nan() && right.value.is_nan()))
            })
    }
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Timed<f64>> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Timed<f64>> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Timed<f64>> {
        self.0.last()
    }

    /// Value at the provided time, if the time is part of the index.
    pub fn get(&self, time: DateTime<Utc>) -> Option<f64> {
        self.0
            .binary_search_by(|point| point.time.cmp(&time))
            .ok()
            .map(|position| self.0[position].value)
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|point| point.value).collect()
    }

    pub fn times(&self) -> Vec<DateTime<Utc>> {
        self.0.iter().map(|point| point.time).collect()
    }

    /// Number of missing entries.
    pub fn count_missing(&self) -> usize {
        self.0.iter().filter(|point| point.value.is_nan()).count()
    }

    /// Apply `op` to every value, keeping the index.
    pub fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self(
            self.0
                .iter()
                .map(|point| Timed::new(op(point.value), point.time))
                .collect(),
        )
    }

    /// Combine every value with the value `period` positions earlier using `op(current, other)`.
    ///
    /// A negative `period` looks forward instead. Positions without a counterpart are missing.
    pub fn lagged<F>(&self, period: isize, op: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self(
            self.0
                .iter()
                .enumerate()
                .map(|(position, point)| {
                    let value = (position as isize)
                        .checked_sub(period)
                        .and_then(|other| usize::try_from(other).ok())
                        .and_then(|other| self.0.get(other))
                        .map_or(f64::NAN, |other| op(point.value, other.value));
                    Timed::new(value, point.time)
                })
                .collect(),
        )
    }

    /// Lagged difference `x[t] - x[t - period]`.
    pub fn diff(&self, period: isize) -> Self {
        self.lagged(period, |current, other| current - other)
    }

    /// Lagged fractional change `x[t] / x[t - period] - 1`.
    pub fn pct_change(&self, period: isize) -> Self {
        self.lagged(period, |current, other| current / other - 1.0)
    }

    /// Running maximum of all values seen so far. Missing entries stay missing and do not
    /// contribute to the maximum.
    pub fn running_max(&self) -> Self {
        let mut peak = f64::NAN;

        Self(
            self.0
                .iter()
                .map(|point| {
                    if point.value.is_nan() {
                        return Timed::new(f64::NAN, point.time);
                    }
                    peak = peak.max(point.value);
                    Timed::new(peak, point.time)
                })
                .collect(),
        )
    }

    /// Remove every missing entry.
    pub fn dropna(self) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|point| !point.value.is_nan())
                .collect(),
        )
    }

    /// Largest non-missing value, or [`f64::NAN`] if there are none.
    pub fn max(&self) -> f64 {
        self.0
            .iter()
            .map(|point| point.value)
            .filter(|value| !value.is_nan())
            .reduce(f64::max)
            .unwrap_or(f64::NAN)
    }

    /// Smallest non-missing value, or [`f64::NAN`] if there are none.
    pub fn min(&self) -> f64 {
        self.0
            .iter()
            .map(|point| point.value)
            .filter(|value| !value.is_nan())
            .reduce(f64::min)
            .unwrap_or(f64::NAN)
    }
}

impl FromIterator<Timed<f64>> for TimeSeries {
    fn from_iter<Iter: IntoIterator<Item = Timed<f64>>>(iter: Iter) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TimeSeries {
    type Item = Timed<f64>;
    type IntoIter = std::vec::IntoIter<Timed<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Timed<f64>;
    type IntoIter = std::slice::Iter<'a, Timed<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
