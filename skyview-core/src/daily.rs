//! Seven-day forecast rows.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{
    format::{rounded, weekday_label},
    raw::{RawDaily, parse_date, parse_timestamp, series_at, text_at},
    wmo::{IconCategory, WeatherCode},
};

pub const DEFAULT_DAILY_LIMIT: usize = 7;

/// One forecast day. Row 0 is today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub date: Option<NaiveDate>,
    pub weekday_label: String,
    pub max_c: Option<i64>,
    pub min_c: Option<i64>,
    pub code: WeatherCode,
    pub description: &'static str,
    pub icon: IconCategory,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

/// The first `limit` days, in source order.
///
/// Temperatures are rounded; a missing or fractional code reads as clear sky.
pub fn select_daily_forecast(daily: Option<&RawDaily>, limit: usize) -> Vec<DailyEntry> {
    let Some(daily) = daily else {
        return Vec::new();
    };
    let Some(times) = daily.time.as_deref() else {
        return Vec::new();
    };

    times
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, day)| {
            let date = day.as_deref().and_then(parse_date);
            let code = series_at(daily.codes(), index)
                .and_then(WeatherCode::from_reading)
                .unwrap_or(WeatherCode::CLEAR_SKY);
            let info = code.info();

            DailyEntry {
                date,
                weekday_label: weekday_label(date),
                max_c: rounded(series_at(daily.temperature_2m_max.as_deref(), index)),
                min_c: rounded(series_at(daily.temperature_2m_min.as_deref(), index)),
                code,
                description: info.description,
                icon: info.icon,
                sunrise: text_at(daily.sunrise.as_deref(), index).and_then(parse_timestamp),
                sunset: text_at(daily.sunset.as_deref(), index).and_then(parse_timestamp),
            }
        })
        .collect()
}
