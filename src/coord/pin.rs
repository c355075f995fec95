//! Starting pin placement
//!
//! Each round starts with the player's pin dropped somewhere in an annulus
//! around the true answer: never on top of it, never absurdly far away.

use crate::coord::geodesy::destination_point;
use crate::coord::Coordinates;
use crate::rng::RandomSource;
use std::f64::consts::PI;

/// Generate a random point between `min_km` and `max_km` from `target`
///
/// # Arguments
/// * `target` - Center of the annulus
/// * `min_km` - Inner radius in kilometers
/// * `max_km` - Outer radius in kilometers (callers guarantee `min_km <= max_km`)
/// * `rng` - Random source
///
/// # Algorithm
/// - bearing = 2 * PI * random()
/// - distance = min + random() * (max - min)
/// - walk the great circle from `target` along that bearing
///
/// Distance is uniform in radius, not in area, so pins lean toward the
/// inner edge of the annulus.
pub fn random_pin(
    target: Coordinates,
    min_km: f64,
    max_km: f64,
    rng: &mut dyn RandomSource,
) -> Coordinates {
    let bearing = 2.0 * PI * rng.float();
    let distance = rng.range(min_km, max_km);

    destination_point(target, bearing, distance)
}
