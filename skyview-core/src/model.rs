use serde::{Deserialize, Serialize};

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A named place, as returned by geocoding or stored as the default location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const UNKNOWN_NAME: &'static str = "Unknown Location";

    /// Used when no location is given and none is configured.
    pub fn fallback() -> Self {
        Self {
            name: "Chennai".to_string(),
            country: Some("India".to_string()),
            admin1: None,
            latitude: 13.0827,
            longitude: 80.2707,
        }
    }

    /// A bare coordinate pair with no known place name.
    pub fn unknown(coordinates: Coordinates) -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_string(),
            country: None,
            admin1: None,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// "Name, Region, Country", skipping empty parts.
    pub fn display_name(&self) -> String {
        [Some(self.name.as_str()), self.admin1.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_bounds() {
        assert!(Coordinates::new(0.0, 0.0).is_valid());
        assert!(Coordinates::new(90.0, 180.0).is_valid());
        assert!(Coordinates::new(-90.0, -180.0).is_valid());
        assert!(!Coordinates::new(90.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.1).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display_name_skips_missing_parts() {
        let mut loc = Location {
            name: "Springfield".into(),
            country: Some("United States".into()),
            admin1: Some("Illinois".into()),
            latitude: 39.8,
            longitude: -89.6,
        };
        assert_eq!(loc.display_name(), "Springfield, Illinois, United States");

        loc.admin1 = None;
        assert_eq!(loc.to_string(), "Springfield, United States");
    }

    #[test]
    fn unknown_location_keeps_coordinates() {
        let loc = Location::unknown(Coordinates::new(1.5, -2.5));
        assert_eq!(loc.display_name(), "Unknown Location");
        assert_eq!(loc.coordinates(), Coordinates::new(1.5, -2.5));
    }

    #[test]
    fn fallback_is_chennai() {
        let loc = Location::fallback();
        assert_eq!(loc.display_name(), "Chennai, India");
        assert!(loc.coordinates().is_valid());
    }
}
