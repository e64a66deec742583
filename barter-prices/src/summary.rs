use crate::{
    config::AnalyticsConfig, error::PricesError, prices::PriceSeries, time::TimeInterval,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

/// Tear sheet of the scalar metrics of a [`PriceSeries`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceSummary {
    pub time_start: DateTime<Utc>,
    pub time_end: DateTime<Utc>,
    pub observations: usize,
    pub elapsed_days: i64,
    /// Name of the annualisation interval, eg/ "Duration 365 (days)".
    pub interval: SmolStr,
    pub abs_return: f64,
    pub annualized_return: f64,
    pub cagr: f64,
    pub max_drawdown: f64,
}

impl PriceSeries {
    /// Generate a [`PriceSummary`] using the annualisation and drawdown sign of the provided
    /// [`AnalyticsConfig`].
    pub fn summary(&self, config: &AnalyticsConfig) -> Result<PriceSummary, PricesError> {
        let interval = config.annual_interval();

        let summary = PriceSummary {
            time_start: self.first().time,
            time_end: self.last().time,
            observations: self.len(),
            elapsed_days: self.elapsed_days(),
            interval: interval.name(),
            abs_return: self.abs_return(),
            annualized_return: self.annualized_return(interval)?,
            cagr: self.cagr(interval)?,
            max_drawdown: self.max_drawdown(config.negative_drawdown),
        };

        debug!(?summary, "generated PriceSummary");
        Ok(summary)
    }
}
