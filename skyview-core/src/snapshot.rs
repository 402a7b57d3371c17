//! Current-conditions snapshot.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    animation::{AnimationCategory, classify_animation},
    aqi::AqiReading,
    raw::{
        RawAirQualityResponse, RawCurrent, RawWeatherResponse, parse_timestamp, series_at, text_at,
    },
    wmo::{IconCategory, WeatherCode},
};

/// Normalized current conditions. Numeric fields are finite or `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalSnapshot {
    pub temperature_c: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub visibility_km: Option<f64>,
    pub uv_index: f64,
    pub weather_code: WeatherCode,
    pub is_day: bool,
    pub description: &'static str,
    pub icon: IconCategory,
    pub animation: AnimationCategory,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub aqi: AqiReading,
}

fn resolve_code(weather: &RawWeatherResponse) -> WeatherCode {
    weather
        .current_value(|c| c.weather_code.and_then(WeatherCode::from_reading))
        .or_else(|| weather.current_value(|c| c.weathercode.and_then(WeatherCode::from_reading)))
        .or_else(|| {
            let daily = weather.daily.as_ref()?;
            series_at(daily.codes(), 0).and_then(WeatherCode::from_reading)
        })
        .unwrap_or(WeatherCode::CLEAR_SKY)
}

/// Build the snapshot from raw responses. Never fails; inputs are not modified.
///
/// Each current value is read from `current`, then the legacy
/// `current_weather` block, before any hourly or top-level fallback.
pub fn normalize(
    weather: &RawWeatherResponse,
    air_quality: Option<&RawAirQualityResponse>,
) -> CanonicalSnapshot {
    let hourly = weather.hourly.as_ref();
    let daily = weather.daily.as_ref();

    let weather_code = resolve_code(weather);
    let info = weather_code.info();
    let is_day = weather
        .current_value(|c| c.is_day)
        .is_none_or(|flag| flag == 1.0);

    let temperature_c = weather
        .current_value(RawCurrent::temperature_c)
        .or_else(|| series_at(hourly.and_then(|h| h.temperature_2m.as_deref()), 0));
    let humidity_pct = weather
        .current_value(|c| c.relative_humidity_2m)
        .or_else(|| series_at(hourly.and_then(|h| h.humidity()), 0));

    CanonicalSnapshot {
        temperature_c,
        wind_speed_kmh: weather.current_value(RawCurrent::wind_speed_kmh),
        wind_direction_deg: weather.current_value(RawCurrent::wind_direction_deg),
        pressure_hpa: weather
            .current_value(|c| c.pressure_msl)
            .or(weather.pressure_msl),
        humidity_pct,
        visibility_km: series_at(hourly.and_then(|h| h.visibility.as_deref()), 0)
            .map(|metres| metres / 1000.0),
        uv_index: series_at(hourly.and_then(|h| h.uv_index.as_deref()), 0)
            .filter(|uv| *uv >= 0.0)
            .unwrap_or(0.0),
        weather_code,
        is_day,
        description: info.description,
        icon: info.icon,
        animation: classify_animation(weather_code, is_day),
        sunrise: text_at(daily.and_then(|d| d.sunrise.as_deref()), 0).and_then(parse_timestamp),
        sunset: text_at(daily.and_then(|d| d.sunset.as_deref()), 0).and_then(parse_timestamp),
        aqi: AqiReading::from_response(air_quality),
    }
}
