//! Raw provider records.
//!
//! Open-Meteo responses are untrusted input: every field is optional, and a
//! field that holds an unexpected JSON type reads as absent instead of
//! rejecting the whole document. Parallel arrays keep their length even when
//! individual members are unusable, so index alignment survives.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{Coordinates, Location};

/// Tolerant field deserializers used with `#[serde(deserialize_with = ...)]`.
mod lenient {
    use serde::{Deserialize, Deserializer, de::DeserializeOwned};
    use serde_json::Value;

    pub(super) fn as_number(value: &Value) -> Option<f64> {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|v| v.is_finite())
    }

    fn as_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(de)?;
        Ok(as_number(&value))
    }

    pub fn text<'de, D>(de: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(as_text(Value::deserialize(de)?))
    }

    pub fn number_series<'de, D>(de: D) -> Result<Option<Vec<Option<f64>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(de)? {
            Value::Array(items) => Some(items.iter().map(as_number).collect()),
            _ => None,
        })
    }

    pub fn text_series<'de, D>(de: D) -> Result<Option<Vec<Option<String>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(de)? {
            Value::Array(items) => Some(items.into_iter().map(as_text).collect()),
            _ => None,
        })
    }

    /// Decode `T` from a JSON object only. Arrays would otherwise fill struct
    /// fields by position.
    pub(super) fn from_object<T: DeserializeOwned>(value: Value) -> Option<T> {
        match value {
            value @ Value::Object(_) => T::deserialize(value).ok(),
            _ => None,
        }
    }

    /// A nested object that is dropped when it does not fit `T`.
    pub fn object<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(from_object(Value::deserialize(de)?))
    }

    /// A list of objects; members that do not fit `T` are skipped.
    pub fn object_series<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(de)? {
            Value::Array(items) => Some(items.into_iter().filter_map(from_object).collect()),
            _ => None,
        })
    }
}

/// Forecast response from the Open-Meteo `/v1/forecast` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWeatherResponse {
    #[serde(default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub utc_offset_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pressure_msl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub current: Option<RawCurrent>,
    /// Legacy block returned for `current_weather=true`.
    #[serde(default, deserialize_with = "lenient::object")]
    pub current_weather: Option<RawCurrent>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub hourly: Option<RawHourly>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub daily: Option<RawDaily>,
}

impl RawWeatherResponse {
    /// Parse a response body. Fails only when the text is not JSON.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Value>(body).map(Self::from_value)
    }

    /// Read a decoded document; anything that is not an object yields an empty response.
    pub fn from_value(value: Value) -> Self {
        lenient::from_object(value).unwrap_or_default()
    }

    /// The `current` block, falling back to the legacy `current_weather` block.
    pub fn current_block(&self) -> Option<&RawCurrent> {
        self.current.as_ref().or(self.current_weather.as_ref())
    }

    /// Read one current-conditions value, field by field: `current` first,
    /// then `current_weather`.
    pub fn current_value<T>(&self, read: impl Fn(&RawCurrent) -> Option<T>) -> Option<T> {
        self.current
            .as_ref()
            .and_then(&read)
            .or_else(|| self.current_weather.as_ref().and_then(&read))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCurrent {
    #[serde(default, deserialize_with = "lenient::text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub temperature_2m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub wind_speed_10m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub windspeed_10m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub windspeed: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub wind_direction_10m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub winddirection_10m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub winddirection: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pressure_msl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub weather_code: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub weathercode: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub is_day: Option<f64>,
}

impl RawCurrent {
    pub fn temperature_c(&self) -> Option<f64> {
        self.temperature_2m.or(self.temperature)
    }

    pub fn wind_speed_kmh(&self) -> Option<f64> {
        self.wind_speed_10m.or(self.windspeed_10m).or(self.windspeed)
    }

    pub fn wind_direction_deg(&self) -> Option<f64> {
        self.wind_direction_10m
            .or(self.winddirection_10m)
            .or(self.winddirection)
    }
}

/// Hourly block: parallel arrays indexed by `time`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHourly {
    #[serde(default, deserialize_with = "lenient::text_series")]
    pub time: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub temperature_2m: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub relativehumidity_2m: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub windspeed_10m: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub uv_index: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub cloudcover: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub cloud_cover: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub visibility: Option<Vec<Option<f64>>>,
}

impl RawHourly {
    pub fn humidity(&self) -> Option<&[Option<f64>]> {
        self.relativehumidity_2m
            .as_deref()
            .or(self.relative_humidity_2m.as_deref())
    }

    pub fn wind_speed(&self) -> Option<&[Option<f64>]> {
        self.windspeed_10m
            .as_deref()
            .or(self.wind_speed_10m.as_deref())
    }

    pub fn cloud(&self) -> Option<&[Option<f64>]> {
        self.cloudcover.as_deref().or(self.cloud_cover.as_deref())
    }
}

/// Daily block: parallel arrays indexed by `time`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDaily {
    #[serde(default, deserialize_with = "lenient::text_series")]
    pub time: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub weathercode: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::number_series")]
    pub weather_code: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient::text_series")]
    pub sunrise: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient::text_series")]
    pub sunset: Option<Vec<Option<String>>>,
}

impl RawDaily {
    pub fn codes(&self) -> Option<&[Option<f64>]> {
        self.weathercode
            .as_deref()
            .or(self.weather_code.as_deref())
    }
}

/// Air-quality response from the Open-Meteo `/v1/air-quality` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAirQualityResponse {
    #[serde(default, deserialize_with = "lenient::object")]
    pub current: Option<RawAirQualityCurrent>,
}

impl RawAirQualityResponse {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Value>(body).map(Self::from_value)
    }

    pub fn from_value(value: Value) -> Self {
        lenient::from_object(value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAirQualityCurrent {
    #[serde(default, deserialize_with = "lenient::number")]
    pub us_aqi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pm2_5: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pm10: Option<f64>,
}

/// Geocoding search response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default, deserialize_with = "lenient::object_series")]
    pub results: Option<Vec<RawLocation>>,
}

impl GeocodingResponse {
    pub fn from_value(value: Value) -> Self {
        lenient::from_object(value).unwrap_or_default()
    }

    /// Results that carry usable coordinates, in provider order.
    pub fn locations(&self) -> Vec<Location> {
        self.results
            .iter()
            .flatten()
            .filter_map(RawLocation::to_location)
            .collect()
    }

    pub fn best_match(&self) -> Option<Location> {
        self.results
            .iter()
            .flatten()
            .find_map(RawLocation::to_location)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub admin1: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
}

impl RawLocation {
    fn to_location(&self) -> Option<Location> {
        let coordinates = Coordinates::new(self.latitude?, self.longitude?);
        Some(Location {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| Location::UNKNOWN_NAME.to_string()),
            country: self.country.clone().filter(|c| !c.is_empty()),
            admin1: self.admin1.clone().filter(|a| !a.is_empty()),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
    }
}

/// Reverse-geocoding response (`reverse-geocode-client`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawReverseGeocode {
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub locality: Option<String>,
    #[serde(default, rename = "principalSubdivision", deserialize_with = "lenient::text")]
    pub principal_subdivision: Option<String>,
    #[serde(default, rename = "countryName", deserialize_with = "lenient::text")]
    pub country_name: Option<String>,
}

impl RawReverseGeocode {
    pub fn from_value(value: Value) -> Self {
        lenient::from_object(value).unwrap_or_default()
    }

    /// Name the place at `coordinates`; `None` when no city or locality is known.
    pub fn to_location(&self, coordinates: Coordinates) -> Option<Location> {
        let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.trim().is_empty());
        let name = non_empty(&self.city).or_else(|| non_empty(&self.locality))?;
        Some(Location {
            name,
            country: non_empty(&self.country_name),
            admin1: non_empty(&self.principal_subdivision),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
    }
}

/// Member `index` of an optional parallel array; out-of-range reads as absent.
pub fn series_at(series: Option<&[Option<f64>]>, index: usize) -> Option<f64> {
    series.and_then(|s| s.get(index).copied().flatten())
}

pub fn text_at(series: Option<&[Option<String>]>, index: usize) -> Option<&str> {
    series.and_then(|s| s.get(index)).and_then(|v| v.as_deref())
}

/// Parse an Open-Meteo wall-clock timestamp (`2026-02-05T14:00`).
///
/// RFC 3339 input keeps its local wall-clock time.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(s).map(|dt| dt.date()))
}
