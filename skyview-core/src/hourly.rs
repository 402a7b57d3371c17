//! Next-hours window over the hourly forecast arrays.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::raw::{RawHourly, parse_timestamp, series_at};

pub const DEFAULT_HOURLY_LIMIT: usize = 24;

/// One hour of forecast. UV, cloud and precipitation default to 0 when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub uv_index: f64,
    pub cloud_pct: f64,
    pub precip_prob_pct: f64,
}

/// Up to `limit` samples at or after `now`, in source order.
///
/// `now` is a wall-clock time in the same zone as the hourly timestamps.
/// Timestamps that do not parse are skipped. Parallel arrays shorter than
/// `time` yield absent (or zero) values for the missing indices.
pub fn select_hourly_window(
    hourly: Option<&RawHourly>,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<HourlySample> {
    let Some(hourly) = hourly else {
        return Vec::new();
    };
    let Some(times) = hourly.time.as_deref() else {
        return Vec::new();
    };

    times
        .iter()
        .enumerate()
        .filter_map(|(index, stamp)| {
            let timestamp = stamp.as_deref().and_then(parse_timestamp)?;
            (timestamp >= now).then_some((index, timestamp))
        })
        .take(limit)
        .map(|(index, timestamp)| HourlySample {
            timestamp,
            temperature_c: series_at(hourly.temperature_2m.as_deref(), index),
            humidity_pct: series_at(hourly.humidity(), index),
            wind_speed_kmh: series_at(hourly.wind_speed(), index),
            uv_index: series_at(hourly.uv_index.as_deref(), index).unwrap_or(0.0),
            cloud_pct: series_at(hourly.cloud(), index).unwrap_or(0.0),
            precip_prob_pct: series_at(hourly.precipitation_probability.as_deref(), index)
                .unwrap_or(0.0),
        })
        .collect()
}
