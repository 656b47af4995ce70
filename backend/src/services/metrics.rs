//! Derived percentages shown in the performance tables.
//!
//! A zero denominator yields `None`, which the tables render as an empty
//! cell (`null` in JSON) instead of failing the render.

/// Nominal availability window per date: 8 hours.
pub const NOMINAL_SECONDS_PER_DATE: f64 = 8.0 * 3600.0;

/// Round to two decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `accepted / offered × 100`, rounded to two decimals.
pub fn acceptance_rate(offered: i64, accepted: i64) -> Option<f64> {
    if offered == 0 {
        return None;
    }
    Some(round2(accepted as f64 / offered as f64 * 100.0))
}

/// Share of the nominal window (8 h per distinct date) spent online, rounded
/// to two decimals.
pub fn online_time_percentage(online_seconds: f64, distinct_dates: usize) -> Option<f64> {
    if distinct_dates == 0 {
        return None;
    }
    let window = NOMINAL_SECONDS_PER_DATE * distinct_dates as f64;
    Some(round2(online_seconds / window * 100.0))
}
