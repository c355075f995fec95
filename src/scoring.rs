//! Scoring rules
//!
//! A pin earns points by distance band; each correctly answered follow-up
//! question earns a single point.

use crate::constants::game::FOLLOW_UPS_PER_ROUND;

/// Points for a correctly answered follow-up question
pub const FOLLOW_UP_POINTS: u32 = 1;

/// Best possible pin score
pub const MAX_PIN_POINTS: u32 = 10;

/// Distance bands (upper bound in km, inclusive) and their points
const PIN_BANDS: [(f64, u32); 6] = [
    (20.0, 10),
    (40.0, 8),
    (100.0, 6),
    (150.0, 4),
    (250.0, 2),
    (500.0, 1),
];

/// Score a pin by its distance from the answer
///
/// Non-increasing in distance. Callers pass non-negative distances.
pub fn pin_score(distance_km: f64) -> u32 {
    PIN_BANDS
        .iter()
        .find(|(limit, _)| distance_km <= *limit)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Maximum score reachable in a game of `total_rounds` rounds
pub fn max_possible_score(total_rounds: usize) -> u32 {
    let rounds = total_rounds as u32;
    rounds * MAX_PIN_POINTS + rounds * FOLLOW_UPS_PER_ROUND as u32 * FOLLOW_UP_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(pin_score(0.0), 10);
        assert_eq!(pin_score(20.0), 10);
        assert_eq!(pin_score(20.01), 8);
        assert_eq!(pin_score(40.0), 8);
        assert_eq!(pin_score(40.5), 6);
        assert_eq!(pin_score(100.0), 6);
        assert_eq!(pin_score(149.9), 4);
        assert_eq!(pin_score(250.0), 2);
        assert_eq!(pin_score(500.0), 1);
        assert_eq!(pin_score(501.0), 0);
        assert_eq!(pin_score(20_000.0), 0);
    }

    #[test]
    fn test_non_increasing() {
        let mut previous = pin_score(0.0);
        let mut d = 0.0;
        while d < 1000.0 {
            let score = pin_score(d);
            assert!(score <= previous, "score rose at {} km", d);
            previous = score;
            d += 0.25;
        }
    }

    #[test]
    fn test_max_possible_score() {
        assert_eq!(max_possible_score(3), 45);
        assert_eq!(max_possible_score(1), 15);
        assert_eq!(max_possible_score(0), 0);
    }
}
