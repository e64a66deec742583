use barter_prices::{
    Timed,
    config::AnalyticsConfig,
    logging::init_logging,
    prices::PriceSeries,
};
use chrono::{Days, NaiveDate};
use tracing::info;

const CONFIG: &str = r#"{ "frequency": "BW", "fill_method": "pad", "annual_days": 365 }"#;

fn main() {
    // Initialise Tracing
    init_logging();

    let config = AnalyticsConfig::from_json(CONFIG).expect("invalid AnalyticsConfig");

    let start = NaiveDate::from_ymd_opt(2023, 1, 2)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start date")
        .and_utc();

    // Synthetic daily prices with a dip in the middle of the year
    let prices = PriceSeries::new((0..365).map(|day| {
        let trend = 100.0 + day as f64 * 0.05;
        let dip = if (150..200).contains(&day) { -12.0 } else { 0.0 };
        Timed::new(
            trend + dip,
            start.checked_add_days(Days::new(day)).expect("valid date"),
        )
    }))
    .expect("invalid PriceSeries");

    let weekly = prices.set_frequency(config.frequency, config.fill_method);
    info!(
        observations = prices.len(),
        weekly = weekly.len(),
        "resampled daily prices to business weeks"
    );

    let returns = prices.pct_returns(config.period, true);
    info!(
        first = ?returns.first(),
        last = ?returns.last(),
        "calculated percentage returns"
    );

    prices
        .summary(&config)
        .expect("PriceSeries spans at least one day")
        .print_summary();
}
