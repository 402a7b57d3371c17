//! The full dashboard view model and its loader.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    daily::{DEFAULT_DAILY_LIMIT, DailyEntry, select_daily_forecast},
    hourly::{DEFAULT_HOURLY_LIMIT, HourlySample, select_hourly_window},
    model::Coordinates,
    provider::{ProviderError, WeatherProvider},
    raw::{RawAirQualityResponse, RawWeatherResponse},
    snapshot::{CanonicalSnapshot, normalize},
};

/// How many hourly and daily rows to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub hourly: usize,
    pub daily: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            hourly: DEFAULT_HOURLY_LIMIT,
            daily: DEFAULT_DAILY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub snapshot: CanonicalSnapshot,
    pub hourly: Vec<HourlySample>,
    pub daily: Vec<DailyEntry>,
}

impl Dashboard {
    /// Recompute everything from one pair of raw responses.
    pub fn build(
        weather: &RawWeatherResponse,
        air_quality: Option<&RawAirQualityResponse>,
        now: NaiveDateTime,
        limits: DashboardLimits,
    ) -> Self {
        Self {
            snapshot: normalize(weather, air_quality),
            hourly: select_hourly_window(weather.hourly.as_ref(), now, limits.hourly),
            daily: select_daily_forecast(weather.daily.as_ref(), limits.daily),
        }
    }

    pub fn today(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }
}

/// Wall-clock "now" at the forecast location.
///
/// Open-Meteo reports hourly times in local time when `timezone=auto`; the
/// response's `utc_offset_seconds` shifts UTC into that zone.
pub fn local_now(weather: &RawWeatherResponse, utc_now: DateTime<Utc>) -> NaiveDateTime {
    let offset = weather
        .utc_offset_seconds
        .filter(|s| s.abs() <= 86_400.0)
        .map_or(0, |s| s as i64);
    utc_now.naive_utc() + Duration::seconds(offset)
}

/// Fetch forecast and air quality concurrently and build the dashboard.
///
/// A failed air-quality request is logged and treated as "no data".
#[instrument(skip(provider), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
pub async fn load_dashboard(
    provider: &dyn WeatherProvider,
    coordinates: Coordinates,
    limits: DashboardLimits,
) -> Result<Dashboard, ProviderError> {
    let (weather, air_quality) = tokio::join!(
        provider.forecast(coordinates),
        provider.air_quality(coordinates)
    );
    let weather = weather?;
    let air_quality = air_quality
        .inspect_err(|err| warn!(error = %err, "Air quality unavailable, showing no data"))
        .ok();

    let now = local_now(&weather, Utc::now());
    debug!(%now, "Building dashboard");

    Ok(Dashboard::build(&weather, air_quality.as_ref(), now, limits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn local_now_applies_offset() {
        let utc = Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap();
        let weather = RawWeatherResponse::from_value(json!({ "utc_offset_seconds": 19800 }));

        let now = local_now(&weather, utc);
        assert_eq!(now.format("%H:%M").to_string(), "17:30");
    }

    #[test]
    fn local_now_without_offset_is_utc() {
        let utc = Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap();
        assert_eq!(
            local_now(&RawWeatherResponse::default(), utc),
            utc.naive_utc()
        );
    }

    #[test]
    fn build_composes_all_parts() {
        let weather = RawWeatherResponse::from_value(json!({
            "current": { "temperature_2m": 4.0, "weather_code": 71, "is_day": 0 },
            "hourly": {
                "time": ["2026-02-05T10:00", "2026-02-05T11:00", "2026-02-05T12:00"],
                "temperature_2m": [3.0, 4.0, 5.0]
            },
            "daily": {
                "time": ["2026-02-05", "2026-02-06"],
                "temperature_2m_max": [6.0, 7.0],
                "temperature_2m_min": [-1.0, 0.0],
                "weathercode": [71, 3]
            }
        }));
        let now = Utc
            .with_ymd_and_hms(2026, 2, 5, 11, 0, 0)
            .unwrap()
            .naive_utc();

        let dashboard = Dashboard::build(&weather, None, now, DashboardLimits::default());

        assert_eq!(dashboard.snapshot.description, "Slight snow");
        assert_eq!(dashboard.hourly.len(), 2);
        assert_eq!(dashboard.hourly[0].temperature_c, Some(4.0));
        assert_eq!(dashboard.daily.len(), 2);
        assert_eq!(dashboard.today().map(|d| d.max_c), Some(Some(6)));
    }

    #[test]
    fn limits_are_respected() {
        let weather = RawWeatherResponse::from_value(json!({
            "daily": { "time": ["2026-02-05", "2026-02-06", "2026-02-07"] }
        }));
        let limits = DashboardLimits {
            hourly: 0,
            daily: 2,
        };
        let dashboard = Dashboard::build(&weather, None, NaiveDateTime::MIN, limits);
        assert_eq!(dashboard.daily.len(), 2);
        assert!(dashboard.hourly.is_empty());
    }
}
