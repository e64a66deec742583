use crate::frequency::{FillMethod, Frequency};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Default arguments for every [`PriceSeries`](crate::prices::PriceSeries) operation.
///
/// Missing fields take their default when deserialised, so `{}` is a valid configuration.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Frequency used by `set_frequency`, eg/ `"B"`, `"BW"`, `"BM"`.
    pub frequency: Frequency,
    /// Hole filling method used by `set_frequency`, eg/ `"pad"`, `"bfill"`, `"none"`.
    pub fill_method: FillMethod,
    /// Value of the first observation after `rebase`.
    pub rebase_base: f64,
    /// Number of observations between the prices of a return.
    pub period: isize,
    /// Remove missing entries from return series.
    pub dropna: bool,
    /// Number of days in the year used for annualisation.
    pub annual_days: u32,
    /// Express drawdowns as negative values.
    pub negative_drawdown: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            frequency: Frequency::BusinessDay,
            fill_method: FillMethod::Pad,
            rebase_base: 100.0,
            period: 1,
            dropna: false,
            annual_days: 365,
            negative_drawdown: false,
        }
    }
}

impl AnalyticsConfig {
    /// Parse an [`AnalyticsConfig`] from JSON.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Annualisation interval, usable anywhere a [`TimeInterval`](crate::time::TimeInterval) is
    /// expected.
    pub fn annual_interval(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.annual_days))
    }
}
