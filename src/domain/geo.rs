//! Geographic primitives: coordinates and geodesic distance.

use geo::{GeodesicDistance, Point};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A WGS-84 coordinate in floating-point degrees.
///
/// Invariant: latitude in [-90, 90], longitude in [-180, 180]. Use
/// [`Coordinate::new`] to construct one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::Validation(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::Validation(format!(
                "longitude {} out of range [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Geodesic distance to `other` in kilometers, on the WGS-84 ellipsoid.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let from = Point::new(self.lon, self.lat);
        let to = Point::new(other.lon, other.lat);
        from.geodesic_distance(&to) / 1000.0
    }
}

/// Round a distance to 2 decimal places for display.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
        assert!(Coordinate::new(90.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
        assert!(Coordinate::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(13.63, 79.42).unwrap();
        let b = Coordinate::new(13.65, 79.45).unwrap();
        let ab = a.distance_km(&b);
        let ba = b.distance_km(&a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_is_non_negative_and_zero_to_self() {
        let a = Coordinate::new(-33.86, 151.21).unwrap();
        let b = Coordinate::new(51.5, -0.12).unwrap();
        assert!(a.distance_km(&b) > 0.0);
        assert_eq!(a.distance_km(&a), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(13.0, 79.42).unwrap();
        let b = Coordinate::new(14.0, 79.42).unwrap();
        let d = a.distance_km(&b);
        assert!((110.0..112.0).contains(&d), "got {}", d);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_km(1.23456), 1.23);
        assert_eq!(round_km(0.005), 0.01);
        assert_eq!(round_km(2.0), 2.0);
    }
}
