//! End-to-end normalization over realistic Open-Meteo payloads.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use skyview_core::{
    AnimationCategory, Dashboard, DashboardLimits, RawAirQualityResponse, RawWeatherResponse,
    WeatherCode, format, normalize, select_daily_forecast, select_hourly_window,
};

fn day_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid start")
}

/// Two days of hourly data and ten days of daily data, as `/v1/forecast` returns them.
fn forecast_body() -> String {
    let times: Vec<String> = (0..48)
        .map(|h| {
            (day_start() + Duration::hours(h))
                .format("%Y-%m-%dT%H:%M")
                .to_string()
        })
        .collect();
    let temps: Vec<f64> = (0..48).map(|h| 10.0 + f64::from(h) * 0.5).collect();
    let days: Vec<String> = (2..12).map(|d| format!("2026-03-{d:02}")).collect();

    serde_json::json!({
        "latitude": 52.52,
        "longitude": 13.419998,
        "generationtime_ms": 0.31,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Berlin",
        "timezone_abbreviation": "CET",
        "current": {
            "time": "2026-03-02T10:00",
            "interval": 900,
            "temperature_2m": 14.6,
            "relative_humidity_2m": 63.4,
            "wind_speed_10m": 11.3,
            "wind_direction_10m": 248,
            "pressure_msl": 1016.4,
            "weather_code": 75,
            "is_day": 1
        },
        "hourly": {
            "time": times,
            "temperature_2m": temps,
            "relativehumidity_2m": vec![70; 48],
            "windspeed_10m": vec![12.0; 48],
            "uv_index": vec![2.15; 48],
            "cloudcover": vec![90; 48],
            "precipitation_probability": vec![35; 48],
            "visibility": vec![18200.0; 48]
        },
        "daily": {
            "time": days,
            "temperature_2m_max": [15.6, 13.2, 12.0, 11.4, 9.9, 8.5, 10.1, 12.7, 14.0, 15.2],
            "temperature_2m_min": [4.4, 3.5, 2.2, 1.0, -0.5, -1.6, 0.3, 2.8, 4.0, 5.1],
            "weathercode": [75, 61, 3, 2, 71, 85, 0, 1, 95, 45],
            "sunrise": ["2026-03-02T06:55", "2026-03-03T06:53"],
            "sunset": ["2026-03-02T17:54", "2026-03-03T17:56"]
        }
    })
    .to_string()
}

fn air_quality_body() -> String {
    serde_json::json!({
        "latitude": 52.55,
        "longitude": 13.45,
        "current": { "time": "2026-03-02T10:00", "us_aqi": 57, "pm2_5": 12.4, "pm10": 18.9 }
    })
    .to_string()
}

#[test]
fn snapshot_from_realistic_payload() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let air = RawAirQualityResponse::from_json(&air_quality_body()).expect("valid json");

    let snapshot = normalize(&weather, Some(&air));

    assert_eq!(format::format_temp(snapshot.temperature_c), "15°");
    assert_eq!(format::format_humidity(snapshot.humidity_pct), "63%");
    assert_eq!(format::format_wind(snapshot.wind_speed_kmh), "11 km/h");
    assert_eq!(format::format_pressure(snapshot.pressure_hpa), "1016 hPa");
    assert_eq!(format::format_visibility(snapshot.visibility_km), "18.2 km");
    assert_eq!(snapshot.weather_code, WeatherCode(75));
    assert_eq!(snapshot.description, "Heavy snow");
    // Heavy snow still plays the rain backdrop.
    assert_eq!(snapshot.animation, AnimationCategory::Rain);
    assert_eq!(snapshot.aqi.value, 57.0);
    assert_eq!(snapshot.aqi.label, "Moderate");
    assert_eq!(snapshot.aqi.color_token, "amber");
    assert_eq!(format::format_clock_time(snapshot.sunrise), "06:55 AM");
    assert_eq!(format::format_clock_time(snapshot.sunset), "05:54 PM");
}

#[test]
fn no_air_quality_reads_as_good() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let snapshot = normalize(&weather, None);

    assert_eq!(snapshot.aqi.value, 0.0);
    assert_eq!(snapshot.aqi.label, "Good");
    assert_eq!(snapshot.aqi.pm10, None);
}

#[test]
fn hourly_window_from_index_ten() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let now = day_start() + Duration::hours(10);

    let window = select_hourly_window(weather.hourly.as_ref(), now, 24);

    assert_eq!(window.len(), 24);
    assert_eq!(window[0].timestamp, now);
    assert_eq!(window[0].temperature_c, Some(15.0));
    assert_eq!(window[23].timestamp, day_start() + Duration::hours(33));
    assert_eq!(window[5].cloud_pct, 90.0);
    assert_eq!(window[5].precip_prob_pct, 35.0);
}

#[test]
fn daily_forecast_keeps_seven_of_ten() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let daily = select_daily_forecast(weather.daily.as_ref(), 7);

    assert_eq!(daily.len(), 7);
    assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2026, 3, 2));
    assert_eq!(daily[0].weekday_label, "Mon");
    assert_eq!(daily[0].max_c, Some(16));
    assert_eq!(daily[4].min_c, Some(0));
    assert_eq!(daily[5].min_c, Some(-2));
    assert_eq!(daily[5].description, "Slight snow showers");
    // Sunrise only covers the first two days.
    assert!(daily[1].sunrise.is_some());
    assert!(daily[2].sunrise.is_none());
}

#[test]
fn misaligned_arrays_do_not_panic() {
    let body = serde_json::json!({
        "current": "oops",
        "hourly": {
            "time": ["2026-03-02T00:00", "2026-03-02T01:00", "2026-03-02T02:00"],
            "temperature_2m": [1.0],
            "uv_index": "n/a"
        },
        "daily": {
            "time": ["2026-03-02", "2026-03-03"],
            "temperature_2m_max": [],
            "weathercode": [null, "61"]
        }
    })
    .to_string();
    let weather = RawWeatherResponse::from_json(&body).expect("valid json");

    let dashboard = Dashboard::build(&weather, None, day_start(), DashboardLimits::default());

    assert_eq!(dashboard.snapshot.temperature_c, Some(1.0));
    assert_eq!(dashboard.snapshot.weather_code, WeatherCode::CLEAR_SKY);
    assert_eq!(dashboard.hourly.len(), 3);
    assert_eq!(dashboard.hourly[2].temperature_c, None);
    assert_eq!(dashboard.hourly[2].uv_index, 0.0);
    assert_eq!(dashboard.daily[0].code, WeatherCode::CLEAR_SKY);
    assert_eq!(dashboard.daily[1].code, WeatherCode(61));
    assert_eq!(dashboard.daily[1].max_c, None);
}

#[test]
fn dashboard_is_rebuilt_identically() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let air = RawAirQualityResponse::from_json(&air_quality_body()).expect("valid json");
    let now = day_start() + Duration::hours(6);

    let first = Dashboard::build(&weather, Some(&air), now, DashboardLimits::default());
    let second = Dashboard::build(&weather, Some(&air), now, DashboardLimits::default());

    assert_eq!(first, second);
}

#[test]
fn dashboard_serializes_for_presentation() {
    let weather = RawWeatherResponse::from_json(&forecast_body()).expect("valid json");
    let dashboard = Dashboard::build(&weather, None, day_start(), DashboardLimits::default());

    let json = serde_json::to_value(&dashboard).expect("serialize");
    assert_eq!(json["snapshot"]["animation"], "rain");
    assert_eq!(json["snapshot"]["icon"], "snowflake");
    assert_eq!(json["snapshot"]["weather_code"], 75);
    assert_eq!(json["daily"][0]["weekday_label"], "Mon");
    assert_eq!(json["hourly"].as_array().map(Vec::len), Some(24));
}
