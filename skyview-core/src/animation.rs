//! Backdrop animation selection.

use serde::{Deserialize, Serialize};

use crate::wmo::WeatherCode;

/// The seven backdrop animations the dashboard can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationCategory {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Overcast,
}

impl AnimationCategory {
    /// Classify by numeric range. Ranges are tested in order and the first
    /// match wins, so 71..=82 is claimed by rain before snow is considered.
    pub fn from_code(code: WeatherCode) -> Self {
        match code.0 {
            0 | 1 => Self::Clear,
            2 | 3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            c if (51..=82).contains(&c) => Self::Rain,
            // Only 83..=86 get here.
            c if (71..=86).contains(&c) => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Overcast,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Overcast => "overcast",
        }
    }
}

impl std::fmt::Display for AnimationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animation category for a code. Day/night does not change the category.
pub fn classify_animation(code: WeatherCode, _is_day: bool) -> AnimationCategory {
    AnimationCategory::from_code(code)
}

/// The full backdrop: category, background scene and the night starfield overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Backdrop {
    pub category: AnimationCategory,
    pub scene: &'static str,
    pub starfield: bool,
}

impl Backdrop {
    pub fn new(code: WeatherCode, is_day: bool) -> Self {
        let category = classify_animation(code, is_day);
        let scene = match category {
            AnimationCategory::Clear if is_day => "clear-day",
            AnimationCategory::Clear => "clear-night",
            AnimationCategory::PartlyCloudy | AnimationCategory::Overcast => "cloudy",
            AnimationCategory::Fog => "foggy",
            AnimationCategory::Rain => "rainy",
            AnimationCategory::Snow => "snowy",
            AnimationCategory::Thunderstorm => "thunderstorm",
        };

        Self {
            category,
            scene,
            starfield: category == AnimationCategory::Clear && !is_day,
        }
    }
}
