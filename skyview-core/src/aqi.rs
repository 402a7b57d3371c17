//! US AQI classification.

use serde::Serialize;

use crate::raw::RawAirQualityResponse;

/// The six US EPA AQI bands. Upper edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiBand {
    /// 0 to 50
    Good,
    /// 51 to 100
    Moderate,
    /// 101 to 150
    UnhealthyForSensitiveGroups,
    /// 151 to 200
    Unhealthy,
    /// 201 to 300
    VeryUnhealthy,
    /// Above 300
    Hazardous,
}

impl AqiBand {
    /// Band for a reading. Non-finite readings count as 0.
    pub fn from_value(value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        if value <= 50.0 {
            Self::Good
        } else if value <= 100.0 {
            Self::Moderate
        } else if value <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if value <= 200.0 {
            Self::Unhealthy
        } else if value <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    pub const fn color_token(&self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Moderate => "amber",
            Self::UnhealthyForSensitiveGroups => "red",
            Self::Unhealthy => "dark-red",
            Self::VeryUnhealthy => "maroon",
            Self::Hazardous => "deep-purple",
        }
    }

    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Good => "#10b981",
            Self::Moderate => "#f59e0b",
            Self::UnhealthyForSensitiveGroups => "#ef4444",
            Self::Unhealthy => "#dc2626",
            Self::VeryUnhealthy => "#7f1d1d",
            Self::Hazardous => "#4b0082",
        }
    }
}

/// Label and colour for one AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiClass {
    pub band: AqiBand,
    pub label: &'static str,
    pub color_token: &'static str,
}

pub fn classify_aqi(value: f64) -> AqiClass {
    let band = AqiBand::from_value(value);
    AqiClass {
        band,
        label: band.label(),
        color_token: band.color_token(),
    }
}

/// Air quality as shown on the dashboard.
///
/// A missing reading is reported as 0 and therefore "Good", the same as a
/// perfectly clean reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiReading {
    pub value: f64,
    pub band: AqiBand,
    pub label: &'static str,
    pub color_token: &'static str,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
}

impl AqiReading {
    pub fn from_response(response: Option<&RawAirQualityResponse>) -> Self {
        let current = response.and_then(|r| r.current.as_ref());
        let value = current
            .and_then(|c| c.us_aqi)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        let class = classify_aqi(value);

        Self {
            value,
            band: class.band,
            label: class.label,
            color_token: class.color_token,
            pm2_5: current.and_then(|c| c.pm2_5),
            pm10: current.and_then(|c| c.pm10),
        }
    }
}
