use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Span of time a price series return is annualised over.
///
/// [`PriceSeries::annualized_return`](crate::prices::PriceSeries::annualized_return) and
/// [`PriceSeries::cagr`](crate::prices::PriceSeries::cagr) scale the elapsed days of a series by
/// [`TimeInterval::days`].
pub trait TimeInterval: Copy {
    /// Label used in tear sheets, eg/ "Annual(365)".
    fn name(&self) -> SmolStr;

    fn interval(&self) -> TimeDelta;

    /// Length of the interval in (possibly fractional) days.
    fn days(&self) -> f64 {
        self.interval().num_seconds() as f64 / SECONDS_PER_DAY
    }
}

/// Calendar year of 365 days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual365;

impl TimeInterval for Annual365 {
    fn name(&self) -> SmolStr {
        SmolStr::new_static("Annual(365)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(365)
    }
}

/// Trading year of 252 sessions, common for equities.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual252;

impl TimeInterval for Annual252 {
    fn name(&self) -> SmolStr {
        SmolStr::new_static("Annual(252)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(252)
    }
}

/// Arbitrary annualisation span, eg/ the configured `annualization_days`.
impl TimeInterval for TimeDelta {
    fn name(&self) -> SmolStr {
        format_smolstr!("Duration {} (days)", self.num_days())
    }

    fn interval(&self) -> TimeDelta {
        *self
    }
}
