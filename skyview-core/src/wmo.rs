//! WMO weather interpretation codes.
//!
//! See <https://open-meteo.com/en/docs> for the code reference. Only the subset
//! Open-Meteo emits is named; every other integer classifies as "Unknown".

use serde::{Deserialize, Serialize};

use crate::animation::AnimationCategory;

/// A WMO weather code. Any integer is a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i64);

impl WeatherCode {
    pub const CLEAR_SKY: Self = Self(0);

    pub const KNOWN: [i64; 24] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96,
        99,
    ];

    /// Convert a raw numeric reading; fractional values are not codes.
    pub fn from_reading(value: f64) -> Option<Self> {
        (value.is_finite() && value.fract() == 0.0).then_some(Self(value as i64))
    }

    pub fn is_known(self) -> bool {
        Self::KNOWN.contains(&self.0)
    }

    pub fn info(self) -> CodeInfo {
        classify(self)
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon family for a weather code. Coarser than the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    Sun,
    CloudSun,
    Cloud,
    Smog,
    CloudRain,
    Snowflake,
    Bolt,
}

impl IconCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::CloudSun => "cloud-sun",
            Self::Cloud => "cloud",
            Self::Smog => "smog",
            Self::CloudRain => "cloud-rain",
            Self::Snowflake => "snowflake",
            Self::Bolt => "bolt",
        }
    }

    /// Terminal glyph for the icon.
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Sun => "☀️",
            Self::CloudSun => "🌤️",
            Self::Cloud => "☁️",
            Self::Smog => "🌫️",
            Self::CloudRain => "🌧️",
            Self::Snowflake => "❄️",
            Self::Bolt => "⛈️",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dashboard derives from a single weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    pub icon: IconCategory,
    pub description: &'static str,
    pub animation: AnimationCategory,
}

impl CodeInfo {
    pub const UNKNOWN: Self = Self {
        icon: IconCategory::Cloud,
        description: "Unknown",
        animation: AnimationCategory::Overcast,
    };
}

fn lookup(code: i64) -> Option<(IconCategory, &'static str)> {
    use IconCategory::*;

    let entry = match code {
        0 => (Sun, "Clear sky"),
        1 => (CloudSun, "Mainly clear"),
        2 => (Cloud, "Partly cloudy"),
        3 => (Cloud, "Overcast"),
        45 => (Smog, "Foggy"),
        48 => (Smog, "Depositing rime fog"),
        51 => (CloudRain, "Light drizzle"),
        53 => (CloudRain, "Moderate drizzle"),
        55 => (CloudRain, "Dense drizzle"),
        61 => (CloudRain, "Slight rain"),
        63 => (CloudRain, "Moderate rain"),
        65 => (CloudRain, "Heavy rain"),
        71 => (Snowflake, "Slight snow"),
        73 => (Snowflake, "Moderate snow"),
        75 => (Snowflake, "Heavy snow"),
        77 => (Snowflake, "Snow grains"),
        80 => (CloudRain, "Slight rain showers"),
        81 => (CloudRain, "Moderate rain showers"),
        82 => (CloudRain, "Violent rain showers"),
        85 => (Snowflake, "Slight snow showers"),
        86 => (Snowflake, "Heavy snow showers"),
        95 => (Bolt, "Thunderstorm"),
        96 => (Bolt, "Thunderstorm with hail"),
        99 => (Bolt, "Thunderstorm with heavy hail"),
        _ => return None,
    };
    Some(entry)
}

/// Classify any integer code. Codes outside the known set get [`CodeInfo::UNKNOWN`].
pub fn classify(code: WeatherCode) -> CodeInfo {
    match lookup(code.0) {
        Some((icon, description)) => CodeInfo {
            icon,
            description,
            animation: AnimationCategory::from_code(code),
        },
        None => CodeInfo::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptions() {
        let expected = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Foggy"),
            (48, "Depositing rime fog"),
            (53, "Moderate drizzle"),
            (65, "Heavy rain"),
            (77, "Snow grains"),
            (82, "Violent rain showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (99, "Thunderstorm with heavy hail"),
        ];
        for (code, description) in expected {
            assert_eq!(classify(WeatherCode(code)).description, description, "code {code}");
        }
    }

    #[test]
    fn every_known_code_has_a_description() {
        for code in WeatherCode::KNOWN {
            let info = classify(WeatherCode(code));
            assert_ne!(info.description, "Unknown", "code {code}");
            assert!(WeatherCode(code).is_known());
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        for code in [-1, 4, 44, 46, 56, 57, 66, 67, 100, 255, i64::MAX, i64::MIN] {
            let info = classify(WeatherCode(code));
            assert_eq!(info, CodeInfo::UNKNOWN, "code {code}");
            assert_eq!(info.icon, IconCategory::Cloud);
            assert_eq!(info.animation, AnimationCategory::Overcast);
        }
    }

    #[test]
    fn icons_are_coarser_than_descriptions() {
        assert_eq!(classify(WeatherCode(61)).icon, IconCategory::CloudRain);
        assert_eq!(classify(WeatherCode(81)).icon, IconCategory::CloudRain);
        assert_eq!(classify(WeatherCode(73)).icon, IconCategory::Snowflake);
        assert_eq!(classify(WeatherCode(96)).icon, IconCategory::Bolt);
        assert_eq!(classify(WeatherCode(0)).icon.as_str(), "sun");
        assert_eq!(classify(WeatherCode(1)).icon.to_string(), "cloud-sun");
    }

    #[test]
    fn known_animation_follows_range_classifier() {
        assert_eq!(classify(WeatherCode(0)).animation, AnimationCategory::Clear);
        assert_eq!(classify(WeatherCode(48)).animation, AnimationCategory::Fog);
        assert_eq!(classify(WeatherCode(75)).animation, AnimationCategory::Rain);
        assert_eq!(classify(WeatherCode(86)).animation, AnimationCategory::Snow);
        assert_eq!(
            classify(WeatherCode(95)).animation,
            AnimationCategory::Thunderstorm
        );
    }

    #[test]
    fn from_reading_rejects_fractions() {
        assert_eq!(WeatherCode::from_reading(61.0), Some(WeatherCode(61)));
        assert_eq!(WeatherCode::from_reading(61.5), None);
        assert_eq!(WeatherCode::from_reading(f64::NAN), None);
    }

    #[test]
    fn weather_code_serializes_as_integer() {
        let json = serde_json::to_string(&WeatherCode(63)).expect("serialize");
        assert_eq!(json, "63");
    }
}
