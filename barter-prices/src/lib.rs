#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! # Barter-Prices
//! Analytics over a single historical series of asset prices.
//!
//! A [`PriceSeries`](prices::PriceSeries) is validated and sorted once on construction, then
//! exposes read-only operations that each derive a new [`TimeSeries`](series::TimeSeries) or a
//! scalar:
//! * **Frequency**: re-index onto a calendar grid (business day, weekly, month end, etc.) with a
//!   configurable gap [`FillMethod`](frequency::FillMethod).
//! * **Returns**: rebasing, logarithmic returns, percentage returns and absolute return.
//! * **Growth**: annualised return and compounded annual growth rate (CAGR) over a
//!   [`TimeInterval`](time::TimeInterval).
//! * **Drawdown**: the drawdown series and max drawdown.
//!
//! ## Example
//! ```
//! use barter_prices::{prices::PriceSeries, time::Annual365, Timed};
//! use chrono::{TimeZone, Utc};
//!
//! let prices = PriceSeries::new([
//!     Timed::new(100.0, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
//!     Timed::new(80.0, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
//!     Timed::new(110.0, Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
//! ])
//! .unwrap();
//!
//! assert_eq!(prices.max_drawdown(false), 0.2);
//! assert!(prices.cagr(Annual365).unwrap() > 0.0);
//! ```

use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Analytics configuration, providing the default arguments for every [`PriceSeries`]
/// operation.
///
/// [`PriceSeries`]: prices::PriceSeries
pub mod config;

/// Tabular rendering of a [`PriceSummary`](summary::PriceSummary).
pub mod display;

/// All errors generated in `barter-prices`.
pub mod error;

/// Calendar [`Frequency`](frequency::Frequency) grids and gap-filling reindex.
pub mod frequency;

/// Loosely typed series input, modelling a caller supplied sequence whose index may not be
/// time based.
pub mod index;

/// Default `tracing` subscribers.
pub mod logging;

/// The [`PriceSeries`](prices::PriceSeries) and its analytics.
pub mod prices;

/// Derived [`TimeSeries`](series::TimeSeries) and the array primitives used to build them.
pub mod series;

/// Scalar metrics of a [`PriceSeries`](prices::PriceSeries) collected into one tear sheet.
pub mod summary;

/// TimeInterval definitions used for annualisation.
///
/// For example, `Annual365`, `Annual252`, or any `TimeDelta`.
pub mod time;

/// A value observed at a point in time.
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor,
)]
pub struct Timed<T> {
    pub value: T,
    pub time: DateTime<Utc>,
}
