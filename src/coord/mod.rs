//! Coordinates and geodesy
//!
//! This module handles:
//! - Great-circle distance and destination points on a spherical Earth
//! - Placing a random starting pin within an annulus around a target

pub mod geodesy;
pub mod pin;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.lat.is_finite() || self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = String;

    /// Parse "lat, lng" or "lat lng"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [lat, lng] => {
                let lat: f64 = lat
                    .parse()
                    .map_err(|_| format!("Invalid latitude: {}", lat))?;
                let lng: f64 = lng
                    .parse()
                    .map_err(|_| format!("Invalid longitude: {}", lng))?;
                let coords = Coordinates::new(lat, lng);
                coords.validate().map_err(|e| e.to_string())?;
                Ok(coords)
            }
            _ => Err(format!("Expected \"lat, lng\", got: {}", s)),
        }
    }
}
