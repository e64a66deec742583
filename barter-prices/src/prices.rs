use crate::{
    Timed,
    error::PricesError,
    frequency::{FillMethod, Frequency, reindex},
    index::{IndexKey, Series},
    series::TimeSeries,
    time::TimeInterval,
};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace, warn};

/// Validated, time ascending historical series of strictly positive prices.
///
/// Every analytic is a pure function of the stored series, so a [`PriceSeries`] can be shared
/// freely across threads and queried any number of times.
///
/// Construction rejects:
/// - A non time based index ([`PricesError::IndexNotTime`]).
/// - Duplicate index times ([`PricesError::DuplicateIndex`]).
/// - Zero, negative or NaN prices ([`PricesError::NonPositivePrice`]).
/// - An empty series ([`PricesError::EmptySeries`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<Timed<f64>>,
}

impl PriceSeries {
    /// Construct a [`PriceSeries`] from time indexed prices, sorting them by time ascending.
    pub fn new<Iter>(points: Iter) -> Result<Self, PricesError>
    where
        Iter: IntoIterator<Item = Timed<f64>>,
    {
        let mut points = points.into_iter().collect::<Vec<_>>();

        if points.is_empty() {
            warn!("rejected empty price series");
            return Err(PricesError::EmptySeries);
        }

        let sorted = points
            .iter()
            .tuple_windows()
            .all(|(prev, next)| prev.time <= next.time);
        if !sorted {
            points.sort_by_key(|point| point.time);
        }

        if let Some((duplicate, _)) = points
            .iter()
            .tuple_windows()
            .find(|(prev, next)| prev.time == next.time)
        {
            warn!(time = %duplicate.time, "rejected price series with duplicate index");
            return Err(PricesError::DuplicateIndex(duplicate.time));
        }

        if let Some(invalid) = points
            .iter()
            .find(|point| point.value.is_nan() || point.value <= 0.0)
        {
            warn!(
                time = %invalid.time,
                value = invalid.value,
                "rejected price series with non-positive price"
            );
            return Err(PricesError::NonPositivePrice {
                value: invalid.value,
                time: invalid.time,
            });
        }

        debug!(
            len = points.len(),
            resorted = !sorted,
            time_start = %points[0].time,
            "constructed PriceSeries"
        );

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, since an empty [`PriceSeries`] cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Timed<f64>> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Timed<f64>] {
        &self.points
    }

    pub fn first(&self) -> Timed<f64> {
        self.points[0]
    }

    pub fn last(&self) -> Timed<f64> {
        self.points[self.points.len() - 1]
    }

    /// Whole days elapsed between the first and last observation.
    pub fn elapsed_days(&self) -> i64 {
        self.last()
            .time
            .signed_duration_since(self.first().time)
            .num_days()
    }

    /// Stored series as a [`TimeSeries`].
    pub fn to_time_series(&self) -> TimeSeries {
        TimeSeries(self.points.clone())
    }

    /// Re-index the series onto the provided [`Frequency`] grid, filling the holes using the
    /// provided [`FillMethod`].
    ///
    /// The grid spans the first to the last observation.
    pub fn set_frequency(&self, frequency: Frequency, method: FillMethod) -> TimeSeries {
        let grid = frequency.grid(self.first().time, self.last().time);
        trace!(%frequency, %method, grid_len = grid.len(), "re-indexing PriceSeries");
        reindex(&self.points, &grid, method)
    }

    /// Rescale the series so the first value equals `base`.
    pub fn rebase(&self, base: f64) -> TimeSeries {
        let first = self.first().value;
        self.to_time_series().map(|value| value / first * base)
    }

    /// Logarithmic returns over `period` observations, `ln(p[t]) - ln(p[t - period])`.
    ///
    /// Observations without a counterpart `period` observations away are missing, and are
    /// removed if `dropna` is true.
    pub fn log_returns(&self, period: isize, dropna: bool) -> TimeSeries {
        let returns = self.to_time_series().map(f64::ln).diff(period);
        drop_missing_if(returns, dropna)
    }

    /// Percentage returns over `period` observations, `p[t] / p[t - period] - 1`.
    ///
    /// Observations without a counterpart `period` observations away are missing, and are
    /// removed if `dropna` is true.
    pub fn pct_returns(&self, period: isize, dropna: bool) -> TimeSeries {
        let returns = self.to_time_series().pct_change(period);
        drop_missing_if(returns, dropna)
    }

    /// Absolute return over the whole series, `last / first - 1`.
    pub fn abs_return(&self) -> f64 {
        self.last().value / self.first().value - 1.0
    }

    /// Absolute return scaled linearly to the provided [`TimeInterval`].
    ///
    /// eg/ `abs_return * 365 / elapsed_days` for [`Annual365`](crate::time::Annual365).
    pub fn annualized_return<Interval>(&self, interval: Interval) -> Result<f64, PricesError>
    where
        Interval: TimeInterval,
    {
        let elapsed_days = self.elapsed_days_non_zero()?;
        Ok(self.abs_return() * interval.days() / elapsed_days)
    }

    /// Compounded annual growth rate over the provided [`TimeInterval`].
    ///
    /// eg/ `(1 + abs_return) ^ (365 / elapsed_days) - 1` for
    /// [`Annual365`](crate::time::Annual365).
    ///
    /// See docs: <https://www.investopedia.com/terms/c/cagr.asp>
    pub fn cagr<Interval>(&self, interval: Interval) -> Result<f64, PricesError>
    where
        Interval: TimeInterval,
    {
        let elapsed_days = self.elapsed_days_non_zero()?;
        Ok((1.0 + self.abs_return()).powf(interval.days() / elapsed_days) - 1.0)
    }

    /// Drawdown series, `(running_max - price) / running_max`, with values in `[0, 1)`.
    ///
    /// If `negative` is true the series is negated, with values in `(-1, 0]`.
    ///
    /// See docs: <https://www.investopedia.com/terms/d/drawdown.asp>
    pub fn drawdown(&self, negative: bool) -> TimeSeries {
        let sign = if negative { -1.0 } else { 1.0 };

        self.to_time_series()
            .running_max()
            .iter()
            .zip(self.points.iter())
            .map(|(peak, point)| {
                let drawdown = (peak.value - point.value) / peak.value;
                Timed::new(sign * drawdown, point.time)
            })
            .collect()
    }

    /// Largest drawdown of the series.
    ///
    /// If `negative` is true the drawdown is expressed as a negative value, ie/ the minimum of the
    /// negative drawdown series.
    ///
    /// See docs: <https://www.investopedia.com/terms/m/maximum-drawdown-mdd.asp>
    pub fn max_drawdown(&self, negative: bool) -> f64 {
        let drawdown = self.drawdown(negative);
        if negative {
            drawdown.min()
        } else {
            drawdown.max()
        }
    }

    fn elapsed_days_non_zero(&self) -> Result<f64, PricesError> {
        match self.elapsed_days() {
            0 => Err(PricesError::NoElapsedDays {
                time_start: self.first().time,
                time_end: self.last().time,
            }),
            days => Ok(days as f64),
        }
    }
}

fn drop_missing_if(series: TimeSeries, dropna: bool) -> TimeSeries {
    if dropna { series.dropna() } else { series }
}

impl TryFrom<Series<IndexKey>> for PriceSeries {
    type Error = PricesError;

    fn try_from(series: Series<IndexKey>) -> Result<Self, Self::Error> {
        let points = series
            .into_iter()
            .enumerate()
            .map(|(position, (key, value))| match key.as_time() {
                Some(time) => Ok(Timed::new(value, time)),
                None => {
                    warn!(position, kind = %key.kind(), "rejected price series with non time index");
                    Err(PricesError::IndexNotTime {
                        position,
                        kind: key.kind(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(points)
    }
}

impl TryFrom<Series<DateTime<Utc>>> for PriceSeries {
    type Error = PricesError;

    fn try_from(series: Series<DateTime<Utc>>) -> Result<Self, Self::Error> {
        Self::new(
            series
                .into_iter()
                .map(|(time, value)| Timed::new(value, time)),
        )
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<Timed<f64>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        PriceSeries::new(raw.points).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a Timed<f64>;
    type IntoIter = std::slice::Iter<'a, Timed<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        test_utils::{assert_values_eq, daily, date, f64_is_eq, time_plus_days},
        time::{Annual252, Annual365},
    };
    use chrono::TimeDelta;
    use smol_str::SmolStr;

    fn prices(values: &[f64]) -> PriceSeries {
        PriceSeries::new(daily(date(2024, 1, 1), values)).unwrap()
    }

    #[test]
    fn test_price_series_new_validation() {
        struct TestCase {
            input: Vec<Timed<f64>>,
            expected: Result<(), PricesError>,
        }

        let base = date(2024, 1, 1);

        let cases = vec![
            // TC0: valid
            TestCase {
                input: daily(base, &[1.0, 2.0]),
                expected: Ok(()),
            },
            // TC1: empty
            TestCase {
                input: vec![],
                expected: Err(PricesError::EmptySeries),
            },
            // TC2: duplicate index
            TestCase {
                input: vec![
                    Timed::new(1.0, base),
                    Timed::new(2.0, time_plus_days(base, 1)),
                    Timed::new(3.0, base),
                ],
                expected: Err(PricesError::DuplicateIndex(base)),
            },
            // TC3: zero price
            TestCase {
                input: daily(base, &[1.0, 0.0]),
                expected: Err(PricesError::NonPositivePrice {
                    value: 0.0,
                    time: time_plus_days(base, 1),
                }),
            },
            // TC4: negative price
            TestCase {
                input: daily(base, &[-1.0, 2.0]),
                expected: Err(PricesError::NonPositivePrice {
                    value: -1.0,
                    time: base,
                }),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = PriceSeries::new(test.input).map(|_| ());
            assert_eq!(actual, test.expected, "TC{index} failed");
            if let Err(error) = actual {
                assert_eq!(error.kind(), ErrorKind::Value, "TC{index} failed");
            }
        }
    }

    #[test]
    fn test_price_series_rejects_nan_price() {
        let actual = PriceSeries::new(daily(date(2024, 1, 1), &[1.0, f64::NAN]));
        assert!(matches!(actual, Err(PricesError::NonPositivePrice { .. })));
    }

    #[test]
    fn test_price_series_try_from_series_rejects_non_time_index() {
        struct TestCase {
            input: Series<IndexKey>,
            expected: PricesError,
        }

        let cases = vec![
            // TC0: integer index
            TestCase {
                input: [(IndexKey::Integer(0), 1.0), (IndexKey::Integer(1), 2.0)]
                    .into_iter()
                    .collect(),
                expected: PricesError::IndexNotTime {
                    position: 0,
                    kind: crate::index::IndexKind::Integer,
                },
            },
            // TC1: mixed index, label at position 1
            TestCase {
                input: Series(vec![
                    (IndexKey::Time(date(2024, 1, 1)), 1.0),
                    (IndexKey::Label(SmolStr::new("tomorrow")), 2.0),
                ]),
                expected: PricesError::IndexNotTime {
                    position: 1,
                    kind: crate::index::IndexKind::Label,
                },
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = PriceSeries::try_from(test.input).unwrap_err();
            assert_eq!(actual, test.expected, "TC{index} failed");
            assert_eq!(actual.kind(), ErrorKind::Type, "TC{index} failed");
        }
    }

    #[test]
    fn test_price_series_sorts_by_time() {
        let input = vec![
            Timed::new(30.0, date(2024, 1, 3)),
            Timed::new(10.0, date(2024, 1, 1)),
            Timed::new(20.0, date(2024, 1, 2)),
        ];

        let actual = PriceSeries::new(input.clone()).unwrap();

        assert_eq!(
            actual.iter().map(|point| point.time).collect::<Vec<_>>(),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
        assert_eq!(actual.first().value, 10.0);
        assert_eq!(actual.last().value, 30.0);

        // Caller input is untouched
        assert_eq!(input[0].value, 30.0);
    }

    #[test]
    fn test_set_frequency() {
        // Friday, then the following Tuesday
        let series = PriceSeries::new([
            Timed::new(10.0, date(2024, 1, 5)),
            Timed::new(12.0, date(2024, 1, 9)),
        ])
        .unwrap();

        let actual = series.set_frequency(Frequency::BusinessDay, FillMethod::Pad);
        assert_eq!(
            actual.times(),
            vec![date(2024, 1, 5), date(2024, 1, 8), date(2024, 1, 9)]
        );
        assert_values_eq(&actual.values(), &[10.0, 10.0, 12.0]);

        let actual = series.set_frequency(Frequency::Daily, FillMethod::Missing);
        assert_eq!(actual.len(), 5);
        assert_eq!(actual.count_missing(), 3);

        let actual = series.set_frequency(Frequency::Daily, FillMethod::Backfill);
        assert_values_eq(&actual.values(), &[10.0, 12.0, 12.0, 12.0, 12.0]);
    }

    #[test]
    fn test_rebase() {
        struct TestCase {
            input: Vec<f64>,
            base: f64,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: base 100
            TestCase {
                input: vec![10.0, 20.0, 40.0],
                base: 100.0,
                expected: vec![100.0, 200.0, 400.0],
            },
            // TC1: base 1
            TestCase {
                input: vec![50.0, 25.0],
                base: 1.0,
                expected: vec![1.0, 0.5],
            },
            // TC2: single entry
            TestCase {
                input: vec![7.0],
                base: 100.0,
                expected: vec![100.0],
            },
        ];

        for test in cases {
            let actual = prices(&test.input).rebase(test.base);
            assert_values_eq(&actual.values(), &test.expected);
        }
    }

    #[test]
    fn test_log_returns() {
        let e = std::f64::consts::E;

        let actual = prices(&[e, e * e]).log_returns(1, false);
        assert_values_eq(&actual.values(), &[f64::NAN, 1.0]);

        let actual = prices(&[e, e * e]).log_returns(1, true);
        assert_values_eq(&actual.values(), &[1.0]);
        assert_eq!(actual.times(), vec![date(2024, 1, 2)]);

        let actual = prices(&[1.0, e, e * e]).log_returns(2, true);
        assert_values_eq(&actual.values(), &[2.0]);

        let actual = prices(&[5.0]).log_returns(1, true);
        assert!(actual.is_empty());
    }

    #[test]
    fn test_pct_returns() {
        struct TestCase {
            input: Vec<f64>,
            period: isize,
            dropna: bool,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: dropna
            TestCase {
                input: vec![10.0, 20.0, 40.0],
                period: 1,
                dropna: true,
                expected: vec![1.0, 1.0],
            },
            // TC1: keep missing head
            TestCase {
                input: vec![10.0, 20.0, 40.0],
                period: 1,
                dropna: false,
                expected: vec![f64::NAN, 1.0, 1.0],
            },
            // TC2: period 2
            TestCase {
                input: vec![10.0, 20.0, 40.0, 10.0],
                period: 2,
                dropna: false,
                expected: vec![f64::NAN, f64::NAN, 3.0, -0.5],
            },
            // TC3: negative period
            TestCase {
                input: vec![10.0, 20.0, 40.0],
                period: -1,
                dropna: true,
                expected: vec![-0.5, -0.5],
            },
            // TC4: single entry
            TestCase {
                input: vec![10.0],
                period: 1,
                dropna: true,
                expected: vec![],
            },
        ];

        for test in cases {
            let actual = prices(&test.input).pct_returns(test.period, test.dropna);
            assert_values_eq(&actual.values(), &test.expected);
        }
    }

    #[test]
    fn test_abs_return() {
        assert_eq!(prices(&[10.0, 20.0]).abs_return(), 1.0);
        assert_eq!(prices(&[10.0, 5.0]).abs_return(), -0.5);
        assert_eq!(prices(&[10.0]).abs_return(), 0.0);
    }

    #[test]
    fn test_annualized_return() {
        // 10% over 73 days => 0.1 * 365 / 73 = 0.5
        let series = PriceSeries::new([
            Timed::new(100.0, date(2024, 1, 1)),
            Timed::new(110.0, time_plus_days(date(2024, 1, 1), 73)),
        ])
        .unwrap();

        assert!(f64_is_eq(series.annualized_return(Annual365).unwrap(), 0.5, 1e-12));
        assert!(f64_is_eq(
            series.annualized_return(Annual252).unwrap(),
            0.1 * 252.0 / 73.0,
            1e-12
        ));
        assert!(f64_is_eq(
            series.annualized_return(TimeDelta::days(73)).unwrap(),
            0.1,
            1e-12
        ));
    }

    #[test]
    fn test_cagr() {
        struct TestCase {
            days: u64,
            end_value: f64,
            expected: f64,
        }

        let base = date(2023, 1, 1);

        let cases = vec![
            // TC0: 10% over one year
            TestCase {
                days: 365,
                end_value: 110.0,
                expected: 0.10,
            },
            // TC1: 21% over two years
            TestCase {
                days: 730,
                end_value: 121.0,
                expected: 0.10,
            },
            // TC2: loss
            TestCase {
                days: 365,
                end_value: 80.0,
                expected: -0.20,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let series = PriceSeries::new([
                Timed::new(100.0, base),
                Timed::new(test.end_value, time_plus_days(base, test.days)),
            ])
            .unwrap();

            let actual = series.cagr(Annual365).unwrap();
            assert!(
                f64_is_eq(actual, test.expected, 1e-12),
                "TC{index} failed: {actual}"
            );
        }
    }

    #[test]
    fn test_annualisation_requires_elapsed_days() {
        let base = date(2024, 1, 1);

        let series = PriceSeries::new([
            Timed::new(100.0, base),
            Timed::new(101.0, base + TimeDelta::hours(6)),
        ])
        .unwrap();

        let expected = PricesError::NoElapsedDays {
            time_start: base,
            time_end: base + TimeDelta::hours(6),
        };

        assert_eq!(series.elapsed_days(), 0);
        assert_eq!(series.annualized_return(Annual365), Err(expected.clone()));
        assert_eq!(series.cagr(Annual365), Err(expected));
        assert_eq!(prices(&[1.0]).cagr(Annual365).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_drawdown() {
        struct TestCase {
            input: Vec<f64>,
            expected: Vec<f64>,
            expected_max: f64,
        }

        let cases = vec![
            // TC0: single dip
            TestCase {
                input: vec![100.0, 80.0, 120.0],
                expected: vec![0.0, 0.2, 0.0],
                expected_max: 0.2,
            },
            // TC1: deepening drawdown after new peak
            TestCase {
                input: vec![100.0, 110.0, 99.0, 88.0, 95.0],
                expected: vec![0.0, 0.0, 0.1, 0.2, 15.0 / 110.0],
                expected_max: 0.2,
            },
            // TC2: monotonic increase
            TestCase {
                input: vec![1.0, 2.0, 3.0],
                expected: vec![0.0, 0.0, 0.0],
                expected_max: 0.0,
            },
            // TC3: single entry
            TestCase {
                input: vec![5.0],
                expected: vec![0.0],
                expected_max: 0.0,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let series = prices(&test.input);

            let positive = series.drawdown(false);
            let negative = series.drawdown(true);
            assert_values_eq(&positive.values(), &test.expected);
            assert_values_eq(
                &negative.values(),
                &positive.values().iter().map(|value| -value).collect::<Vec<_>>(),
            );

            assert!(
                f64_is_eq(series.max_drawdown(false), test.expected_max, 1e-12),
                "TC{index} failed"
            );
            assert!(
                f64_is_eq(series.max_drawdown(true), -test.expected_max, 1e-12),
                "TC{index} failed"
            );
        }
    }

    #[test]
    fn test_operations_are_idempotent() {
        // Gaps between observations, so re-indexing produces missing entries
        let series = PriceSeries::new([
            Timed::new(100.0, date(2024, 1, 1)),
            Timed::new(80.0, date(2024, 1, 3)),
            Timed::new(120.0, date(2024, 1, 8)),
            Timed::new(90.0, date(2024, 1, 10)),
        ])
        .unwrap();

        let log_returns = series.log_returns(1, false);
        let pct_returns = series.pct_returns(2, false);
        let forward_returns = series.pct_returns(-1, false);
        let missing = series.set_frequency(Frequency::Daily, FillMethod::Missing);
        assert!(log_returns.count_missing() > 0);
        assert!(pct_returns.count_missing() > 0);
        assert!(forward_returns.count_missing() > 0);
        assert!(missing.count_missing() > 0);

        assert_eq!(series.log_returns(1, false), log_returns);
        assert_eq!(series.log_returns(1, true), series.log_returns(1, true));
        assert_eq!(series.pct_returns(2, false), pct_returns);
        assert_eq!(series.pct_returns(-1, false), forward_returns);
        assert_eq!(series.pct_returns(1, true), series.pct_returns(1, true));
        assert_eq!(
            series.set_frequency(Frequency::Daily, FillMethod::Missing),
            missing
        );
        assert_eq!(
            series.set_frequency(Frequency::Daily, FillMethod::Pad),
            series.set_frequency(Frequency::Daily, FillMethod::Pad)
        );
        assert_eq!(
            series.set_frequency(Frequency::BusinessDay, FillMethod::Backfill),
            series.set_frequency(Frequency::BusinessDay, FillMethod::Backfill)
        );
        assert_eq!(series.rebase(100.0), series.rebase(100.0));
        assert_eq!(series.abs_return(), series.abs_return());
        assert_eq!(
            series.annualized_return(Annual365),
            series.annualized_return(Annual365)
        );
        assert_eq!(series.cagr(Annual365), series.cagr(Annual365));
        assert_eq!(series.drawdown(false), series.drawdown(false));
        assert_eq!(series.drawdown(true), series.drawdown(true));
        assert_eq!(series.max_drawdown(false), series.max_drawdown(false));
        assert_eq!(series.max_drawdown(true), series.max_drawdown(true));
        assert_eq!(
            series.summary(&crate::config::AnalyticsConfig::default()),
            series.summary(&crate::config::AnalyticsConfig::default())
        );
        assert_eq!(series.elapsed_days(), 9);
    }

    #[test]
    fn test_returns_with_extreme_periods() {
        let series = prices(&[10.0, 20.0, 40.0]);

        for period in [isize::MIN, isize::MAX, -3, 3] {
            let pct_returns = series.pct_returns(period, false);
            assert_eq!(pct_returns.len(), 3, "period {period} failed");
            assert_eq!(pct_returns.count_missing(), 3, "period {period} failed");
            assert!(series.pct_returns(period, true).is_empty(), "period {period} failed");
            assert!(series.log_returns(period, true).is_empty(), "period {period} failed");
        }
    }

    #[test]
    fn test_de_price_series() {
        let input = r#"{
            "points": [
                { "value": 20.0, "time": "2024-01-02T00:00:00Z" },
                { "value": 10.0, "time": "2024-01-01T00:00:00Z" }
            ]
        }"#;

        let actual = serde_json::from_str::<PriceSeries>(input).unwrap();
        assert_eq!(actual, prices(&[10.0, 20.0]));

        let invalid = r#"{ "points": [{ "value": -1.0, "time": "2024-01-01T00:00:00Z" }] }"#;
        let error = serde_json::from_str::<PriceSeries>(invalid).unwrap_err();
        assert!(error.to_string().contains("non-positive"));
    }
}
