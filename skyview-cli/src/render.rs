//! Plain-text rendering of the dashboard.

use std::fmt::{self, Write};

use skyview_core::{
    Backdrop, Dashboard, Location,
    format::{
        PLACEHOLDER, format_clock_time, format_hour, format_humidity, format_pressure,
        format_temp, format_visibility, format_wind, format_wind_direction, rounded, uv_label,
    },
};

pub fn dashboard(location: &Location, dashboard: &Dashboard) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let now = &dashboard.snapshot;
    let backdrop = Backdrop::new(now.weather_code, now.is_day);

    writeln!(out, "📍 {location}")?;
    writeln!(
        out,
        "{} {}  {}  ({})",
        now.icon.emoji(),
        format_temp(now.temperature_c),
        now.description,
        if now.is_day { "day" } else { "night" },
    )?;
    writeln!(
        out,
        "Wind {} from {}   Humidity {}   Pressure {}   Visibility {}",
        format_wind(now.wind_speed_kmh),
        format_wind_direction(now.wind_direction_deg),
        format_humidity(now.humidity_pct),
        format_pressure(now.pressure_hpa),
        format_visibility(now.visibility_km),
    )?;
    writeln!(
        out,
        "UV {} ({})   AQI {} {}   PM2.5 {}   PM10 {}",
        rounded(Some(now.uv_index)).unwrap_or(0),
        uv_label(now.uv_index),
        rounded(Some(now.aqi.value)).unwrap_or(0),
        now.aqi.label,
        optional_number(now.aqi.pm2_5),
        optional_number(now.aqi.pm10),
    )?;
    writeln!(
        out,
        "Sunrise {}   Sunset {}",
        format_clock_time(now.sunrise),
        format_clock_time(now.sunset),
    )?;
    writeln!(
        out,
        "Backdrop: {}{}",
        backdrop.scene,
        if backdrop.starfield { " with stars" } else { "" },
    )?;

    if !dashboard.hourly.is_empty() {
        writeln!(out, "\nNext {} hours", dashboard.hourly.len())?;
        for hour in &dashboard.hourly {
            writeln!(
                out,
                "  {}  {:>5}  {:>4}  {:>9}  UV {:>2}  cloud {:>3}%  rain {:>3}%",
                format_hour(hour.timestamp),
                format_temp(hour.temperature_c),
                format_humidity(hour.humidity_pct),
                format_wind(hour.wind_speed_kmh),
                rounded(Some(hour.uv_index)).unwrap_or(0),
                rounded(Some(hour.cloud_pct)).unwrap_or(0),
                rounded(Some(hour.precip_prob_pct)).unwrap_or(0),
            )?;
        }
    }

    if !dashboard.daily.is_empty() {
        writeln!(out, "\n{}-day forecast", dashboard.daily.len())?;
        for (index, day) in dashboard.daily.iter().enumerate() {
            let label = if index == 0 {
                "Today".to_string()
            } else {
                day.weekday_label.clone()
            };
            writeln!(
                out,
                "  {:<5} {} {:>4} / {:<4} {}",
                label,
                day.icon.emoji(),
                whole_degrees(day.max_c),
                whole_degrees(day.min_c),
                day.description,
            )?;
        }
    }

    Ok(out)
}

pub fn locations(results: &[Location]) -> Result<String, fmt::Error> {
    if results.is_empty() {
        return Ok("No matching locations.\n".to_string());
    }

    let mut out = String::new();
    for (index, location) in results.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {}  ({:.4}, {:.4})",
            index + 1,
            location,
            location.latitude,
            location.longitude
        )?;
    }
    Ok(out)
}

fn whole_degrees(value: Option<i64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v}°"))
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1}"))
}
