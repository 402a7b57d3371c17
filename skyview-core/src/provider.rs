use crate::{
    Config,
    model::{Coordinates, Location},
    provider::open_meteo::OpenMeteoProvider,
    raw::{RawAirQualityResponse, RawWeatherResponse},
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod open_meteo;

/// Errors from fetching raw data. The normalization core never produces these.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Source of raw weather, air-quality and geocoding data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn forecast(&self, coordinates: Coordinates)
    -> Result<RawWeatherResponse, ProviderError>;

    async fn air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<RawAirQualityResponse, ProviderError>;

    /// Matching places, best first. A blank query returns no matches.
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ProviderError>;

    /// Name of the place at `coordinates`, if the provider knows one.
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<Location>, ProviderError>;
}

/// Construct the configured provider.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    Ok(Box::new(OpenMeteoProvider::new(config)?))
}
