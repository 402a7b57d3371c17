//! Open-Meteo forecast, air-quality and geocoding endpoints.
//!
//! No API key is required. See <https://open-meteo.com/en/docs>. Place names
//! for bare coordinates come from the keyless BigDataCloud client endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    Config,
    config::Endpoints,
    model::{Coordinates, Location},
    raw::{GeocodingResponse, RawAirQualityResponse, RawReverseGeocode, RawWeatherResponse},
};

use super::{ProviderError, WeatherProvider};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,\
    wind_direction_10m,pressure_msl,weather_code,is_day";
const HOURLY_FIELDS: &str = "temperature_2m,relativehumidity_2m,windspeed_10m,uv_index,\
    cloudcover,precipitation_probability,visibility";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode,sunrise,sunset";
const AIR_QUALITY_FIELDS: &str = "us_aqi,pm2_5,pm10";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    endpoints: Endpoints,
    forecast_days: usize,
    search_limit: usize,
}

impl OpenMeteoProvider {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            endpoints: config.endpoints.clone(),
            forecast_days: config.daily_days.clamp(1, 16),
            search_limit: config.search_limit.max(1),
        })
    }

    fn validate(coordinates: Coordinates) -> Result<(), ProviderError> {
        if coordinates.is_valid() {
            Ok(())
        } else {
            Err(ProviderError::InvalidCoordinates)
        }
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, ProviderError> {
        debug!(url, ?query, "Requesting weather data");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = res.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(ProviderError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let body = res
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP {status}: {}",
                truncate_body(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

fn coordinate_query(coordinates: Coordinates) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", coordinates.latitude.to_string()),
        ("longitude", coordinates.longitude.to_string()),
    ]
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
    async fn forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<RawWeatherResponse, ProviderError> {
        Self::validate(coordinates)?;

        let mut query = coordinate_query(coordinates);
        query.extend([
            ("current", CURRENT_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ]);

        let value = self.get_json(&self.endpoints.forecast_url, &query).await?;
        Ok(RawWeatherResponse::from_value(value))
    }

    #[instrument(skip(self), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
    async fn air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<RawAirQualityResponse, ProviderError> {
        Self::validate(coordinates)?;

        let mut query = coordinate_query(coordinates);
        query.extend([
            ("current", AIR_QUALITY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]);

        let value = self
            .get_json(&self.endpoints.air_quality_url, &query)
            .await?;
        Ok(RawAirQualityResponse::from_value(value))
    }

    #[instrument(skip(self))]
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        let name = query.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("name", name.to_string()),
            ("count", self.search_limit.to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let value = self
            .get_json(&self.endpoints.geocoding_url, &params)
            .await?;
        Ok(GeocodingResponse::from_value(value).locations())
    }

    #[instrument(skip(self), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<Location>, ProviderError> {
        Self::validate(coordinates)?;

        let mut query = coordinate_query(coordinates);
        query.push(("localityLanguage", "en".to_string()));

        let value = self
            .get_json(&self.endpoints.reverse_geocoding_url, &query)
            .await?;
        Ok(RawReverseGeocode::from_value(value).to_location(coordinates))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
