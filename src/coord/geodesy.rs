//! Spherical geodesy
//!
//! Great-circle distance (Haversine) and the direct problem: the point
//! reached from an origin along a bearing for a given distance. Both use a
//! spherical Earth of radius `EARTH_RADIUS_KM`.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;

/// Calculate the distance between two points in kilometers (Haversine formula)
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Distance in kilometers, symmetric in its arguments
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate the point reached from `origin` along a great circle
///
/// # Arguments
/// * `origin` - Starting point
/// * `bearing` - Initial bearing in radians, clockwise from north
/// * `distance` - Distance to travel in kilometers
///
/// # Returns
/// The destination, with longitude normalized to [-180, 180)
pub fn destination_point(origin: Coordinates, bearing: f64, distance: f64) -> Coordinates {
    let angular = distance / EARTH_RADIUS_KM;
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinates::new(lat2.to_degrees(), normalize_lng(lng2.to_degrees()))
}

/// Wrap a longitude in degrees into [-180, 180)
fn normalize_lng(lng: f64) -> f64 {
    (lng + 540.0).rem_euclid(360.0) - 180.0
}
