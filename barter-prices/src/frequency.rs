use crate::{Timed, error::PricesError, series::TimeSeries};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::{fmt::Display, str::FromStr};

/// Calendar grid a [`PriceSeries`](crate::prices::PriceSeries) can be re-indexed onto.
///
/// Parsed from the conventional frequency codes, eg/ `"B"` (business day), `"BW"` (business week,
/// alias for `"W-FRI"`), `"BM"` (business month end), `"BQ"` (business quarter end) and `"BY"`
/// (business year end). Start anchored variants use an `S` suffix, eg/ `"QS"` and `"BYS"`.
///
/// Every grid preserves the time-of-day of the first observation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Hourly,
    Daily,
    #[default]
    BusinessDay,
    /// Weekly, anchored on the provided [`Weekday`].
    Weekly(Weekday),
    MonthEnd,
    BusinessMonthEnd,
    MonthStart,
    BusinessMonthStart,
    QuarterEnd,
    BusinessQuarterEnd,
    QuarterStart,
    BusinessQuarterStart,
    YearEnd,
    BusinessYearEnd,
    YearStart,
    BusinessYearStart,
}

/// Position of an anchor date within its calendar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum MonthAnchor {
    Start,
    End,
}

impl Frequency {
    /// Generate every on-frequency instant in `[start, end]`.
    ///
    /// The grid begins at the first on-frequency instant at or after `start`.
    pub fn grid(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        if start > end {
            return Vec::new();
        }

        match self {
            Frequency::Hourly => step_grid(start, end, TimeDelta::hours(1)),
            Frequency::Daily => day_grid(start, end, |_| true),
            Frequency::BusinessDay => day_grid(start, end, is_business_day),
            Frequency::Weekly(anchor) => day_grid(start, end, |date| date.weekday() == *anchor),
            Frequency::MonthEnd => month_grid(start, end, 1, MonthAnchor::End, false),
            Frequency::BusinessMonthEnd => month_grid(start, end, 1, MonthAnchor::End, true),
            Frequency::MonthStart => month_grid(start, end, 1, MonthAnchor::Start, false),
            Frequency::BusinessMonthStart => month_grid(start, end, 1, MonthAnchor::Start, true),
            Frequency::QuarterEnd => month_grid(start, end, 3, MonthAnchor::End, false),
            Frequency::BusinessQuarterEnd => month_grid(start, end, 3, MonthAnchor::End, true),
            Frequency::QuarterStart => month_grid(start, end, 3, MonthAnchor::Start, false),
            Frequency::BusinessQuarterStart => month_grid(start, end, 3, MonthAnchor::Start, true),
            Frequency::YearEnd => month_grid(start, end, 12, MonthAnchor::End, false),
            Frequency::BusinessYearEnd => month_grid(start, end, 12, MonthAnchor::End, true),
            Frequency::YearStart => month_grid(start, end, 12, MonthAnchor::Start, false),
            Frequency::BusinessYearStart => month_grid(start, end, 12, MonthAnchor::Start, true),
        }
    }

    /// Canonical frequency code.
    pub fn code(&self) -> SmolStr {
        match self {
            Frequency::Hourly => SmolStr::new_static("H"),
            Frequency::Daily => SmolStr::new_static("D"),
            Frequency::BusinessDay => SmolStr::new_static("B"),
            Frequency::Weekly(anchor) => format_smolstr!("W-{}", weekday_code(*anchor)),
            Frequency::MonthEnd => SmolStr::new_static("M"),
            Frequency::BusinessMonthEnd => SmolStr::new_static("BM"),
            Frequency::MonthStart => SmolStr::new_static("MS"),
            Frequency::BusinessMonthStart => SmolStr::new_static("BMS"),
            Frequency::QuarterEnd => SmolStr::new_static("Q"),
            Frequency::BusinessQuarterEnd => SmolStr::new_static("BQ"),
            Frequency::QuarterStart => SmolStr::new_static("QS"),
            Frequency::BusinessQuarterStart => SmolStr::new_static("BQS"),
            Frequency::YearEnd => SmolStr::new_static("Y"),
            Frequency::BusinessYearEnd => SmolStr::new_static("BY"),
            Frequency::YearStart => SmolStr::new_static("YS"),
            Frequency::BusinessYearStart => SmolStr::new_static("BYS"),
        }
    }
}

impl FromStr for Frequency {
    type Err = PricesError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let frequency = match code {
            "H" | "h" => Frequency::Hourly,
            "D" => Frequency::Daily,
            "B" => Frequency::BusinessDay,
            "W" => Frequency::Weekly(Weekday::Sun),
            "BW" => Frequency::Weekly(Weekday::Fri),
            "M" | "ME" => Frequency::MonthEnd,
            "BM" | "BME" => Frequency::BusinessMonthEnd,
            "MS" => Frequency::MonthStart,
            "BMS" => Frequency::BusinessMonthStart,
            "Q" | "QE" => Frequency::QuarterEnd,
            "BQ" | "BQE" => Frequency::BusinessQuarterEnd,
            "QS" => Frequency::QuarterStart,
            "BQS" => Frequency::BusinessQuarterStart,
            "Y" | "YE" | "A" => Frequency::YearEnd,
            "BY" | "BYE" | "BA" => Frequency::BusinessYearEnd,
            "YS" | "AS" => Frequency::YearStart,
            "BYS" | "BAS" => Frequency::BusinessYearStart,
            weekly => {
                let anchor = weekly
                    .strip_prefix("W-")
                    .and_then(parse_weekday_code)
                    .ok_or_else(|| PricesError::UnsupportedFrequency(SmolStr::new(code)))?;
                Frequency::Weekly(anchor)
            }
        };

        Ok(frequency)
    }
}

impl TryFrom<String> for Frequency {
    type Error = PricesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.code().to_string()
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Method used to fill the holes of a re-indexed series.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMethod {
    /// Holes are left missing ([`f64::NAN`]).
    #[serde(rename = "none")]
    Missing,
    /// Holes take the previous observed value.
    #[default]
    #[serde(alias = "ffill")]
    Pad,
    /// Holes take the next observed value.
    #[serde(alias = "bfill")]
    Backfill,
}

impl FromStr for FillMethod {
    type Err = PricesError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "none" => Ok(FillMethod::Missing),
            "pad" | "ffill" => Ok(FillMethod::Pad),
            "backfill" | "bfill" => Ok(FillMethod::Backfill),
            other => Err(PricesError::UnsupportedFillMethod(SmolStr::new(other))),
        }
    }
}

impl Display for FillMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            FillMethod::Missing => "none",
            FillMethod::Pad => "pad",
            FillMethod::Backfill => "backfill",
        };
        write!(f, "{method}")
    }
}

/// Re-index time ascending `points` onto a time ascending `grid`, filling holes using the
/// provided [`FillMethod`].
pub fn reindex(points: &[Timed<f64>], grid: &[DateTime<Utc>], method: FillMethod) -> TimeSeries {
    grid.iter()
        .map(|time| {
            // Number of observations at or before this grid point
            let at_or_before = points.partition_point(|point| point.time <= *time);

            let value = match method {
                FillMethod::Missing => at_or_before
                    .checked_sub(1)
                    .map(|position| &points[position])
                    .filter(|point| point.time == *time)
                    .map_or(f64::NAN, |point| point.value),
                FillMethod::Pad => at_or_before
                    .checked_sub(1)
                    .map_or(f64::NAN, |position| points[position].value),
                FillMethod::Backfill => {
                    let before = points.partition_point(|point| point.time < *time);
                    points.get(before).map_or(f64::NAN, |point| point.value)
                }
            };

            Timed::new(value, *time)
        })
        .collect()
}

fn is_business_day(date: &NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

fn step_grid(start: DateTime<Utc>, end: DateTime<Utc>, step: TimeDelta) -> Vec<DateTime<Utc>> {
    std::iter::successors(Some(start), |current| current.checked_add_signed(step))
        .take_while(|current| *current <= end)
        .collect()
}

fn day_grid<F>(start: DateTime<Utc>, end: DateTime<Utc>, on_frequency: F) -> Vec<DateTime<Utc>>
where
    F: Fn(&NaiveDate) -> bool,
{
    let time = start.time();

    std::iter::successors(Some(start.date_naive()), |date| {
        date.checked_add_days(Days::new(1))
    })
    .map(|date| (date, at(date, time)))
    .take_while(|(_, current)| *current <= end)
    .filter(|(date, _)| on_frequency(date))
    .map(|(_, current)| current)
    .collect()
}

fn month_grid(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step_months: u32,
    anchor: MonthAnchor,
    business: bool,
) -> Vec<DateTime<Utc>> {
    let time = start.time();
    let Some(first_month) = start.date_naive().with_day(1) else {
        return Vec::new();
    };

    std::iter::successors(Some(first_month), |month| {
        month.checked_add_months(Months::new(1))
    })
    .filter(|month| match anchor {
        // Period ends fall in Mar, Jun, Sep, Dec (quarters) or Dec (years)
        MonthAnchor::End => month.month() % step_months == 0,
        // Period starts fall in Jan, Apr, Jul, Oct (quarters) or Jan (years)
        MonthAnchor::Start => (month.month() - 1) % step_months == 0,
    })
    .map_while(|month| anchor_date(month, anchor, business))
    .map(|date| at(date, time))
    .skip_while(|current| *current < start)
    .take_while(|current| *current <= end)
    .collect()
}

/// Anchor date of the month beginning at `first`.
fn anchor_date(first: NaiveDate, anchor: MonthAnchor, business: bool) -> Option<NaiveDate> {
    match anchor {
        MonthAnchor::Start => {
            let mut date = first;
            while business && !is_business_day(&date) {
                date = date.succ_opt()?;
            }
            Some(date)
        }
        MonthAnchor::End => {
            let mut date = first.checked_add_months(Months::new(1))?.pred_opt()?;
            while business && !is_business_day(&date) {
                date = date.pred_opt()?;
            }
            Some(date)
        }
    }
}

fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

fn parse_weekday_code(code: &str) -> Option<Weekday> {
    match code {
        "MON" => Some(Weekday::Mon),
        "TUE" => Some(Weekday::Tue),
        "WED" => Some(Weekday::Wed),
        "THU" => Some(Weekday::Thu),
        "FRI" => Some(Weekday::Fri),
        "SAT" => Some(Weekday::Sat),
        "SUN" => Some(Weekday::Sun),
        _ => None,
    }
}
