//! Display formatting for dashboard values.
//!
//! Every formatter accepts an absent or non-finite value and renders it as
//! [`PLACEHOLDER`], the "unknown" signal consumed by presentation.

use chrono::{NaiveDate, NaiveDateTime};

pub const PLACEHOLDER: &str = "—";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Round half-way values up (toward positive infinity): 2.5 -> 3, -2.5 -> -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounded integer, or `None` when the value is absent or not finite.
pub fn rounded(value: Option<f64>) -> Option<i64> {
    finite(value).map(|v| round_half_up(v) as i64)
}

fn with_suffix(value: Option<f64>, suffix: &str) -> String {
    match rounded(value) {
        Some(v) => format!("{v}{suffix}"),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_temp(value: impl Into<Option<f64>>) -> String {
    with_suffix(value.into(), "°")
}

pub fn format_wind(value: impl Into<Option<f64>>) -> String {
    with_suffix(value.into(), " km/h")
}

pub fn format_humidity(value: impl Into<Option<f64>>) -> String {
    with_suffix(value.into(), "%")
}

pub fn format_pressure(value: impl Into<Option<f64>>) -> String {
    with_suffix(value.into(), " hPa")
}

pub fn format_wind_direction(value: impl Into<Option<f64>>) -> String {
    with_suffix(value.into(), "°")
}

/// Kilometres with one decimal place.
pub fn format_visibility(km: impl Into<Option<f64>>) -> String {
    match finite(km.into()) {
        Some(v) => format!("{v:.1} km"),
        None => PLACEHOLDER.to_string(),
    }
}

/// "Very High" above 6 once rounded, otherwise "Moderate".
pub fn uv_label(uv: f64) -> &'static str {
    if rounded(Some(uv)).is_some_and(|v| v > 6) {
        "Very High"
    } else {
        "Moderate"
    }
}

/// 12-hour clock, e.g. "02:00 PM".
pub fn format_clock_time(time: Option<NaiveDateTime>) -> String {
    time.map_or_else(
        || PLACEHOLDER.to_string(),
        |t| t.format("%I:%M %p").to_string(),
    )
}

/// Hour-only label for chart axes, e.g. "02 PM".
pub fn format_hour(time: NaiveDateTime) -> String {
    time.format("%I %p").to_string()
}

/// e.g. "Mon, Jan 5".
pub fn format_short_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || PLACEHOLDER.to_string(),
        |d| d.format("%a, %b %-d").to_string(),
    )
}

/// Abbreviated weekday, e.g. "Mon".
pub fn weekday_label(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| PLACEHOLDER.to_string(), |d| d.format("%a").to_string())
}
