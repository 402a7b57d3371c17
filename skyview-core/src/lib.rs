//! Core library for the `skyview` weather dashboard.
//!
//! This crate defines:
//! - Tolerant raw records for Open-Meteo forecast, air-quality and geocoding responses
//! - The normalization core: WMO code table, formatters, AQI classifier,
//!   hourly/daily selectors, animation classifier and snapshot normalizer
//! - An async provider abstraction with an Open-Meteo implementation
//! - Configuration handling
//!
//! The normalization functions are pure and never fail; only the provider
//! layer returns errors.

pub mod animation;
pub mod aqi;
pub mod config;
pub mod daily;
pub mod dashboard;
pub mod format;
pub mod hourly;
pub mod model;
pub mod provider;
pub mod raw;
pub mod snapshot;
pub mod wmo;

pub use animation::{AnimationCategory, Backdrop, classify_animation};
pub use aqi::{AqiBand, AqiClass, AqiReading, classify_aqi};
pub use config::{Config, Endpoints};
pub use daily::{DailyEntry, select_daily_forecast};
pub use dashboard::{Dashboard, DashboardLimits, load_dashboard, local_now};
pub use hourly::{HourlySample, select_hourly_window};
pub use model::{Coordinates, Location};
pub use provider::{ProviderError, WeatherProvider, open_meteo::OpenMeteoProvider};
pub use raw::{GeocodingResponse, RawAirQualityResponse, RawReverseGeocode, RawWeatherResponse};
pub use snapshot::{CanonicalSnapshot, normalize};
pub use wmo::{CodeInfo, IconCategory, WeatherCode, classify};
