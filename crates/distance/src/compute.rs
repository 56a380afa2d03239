//! Central-angle evaluation via the atan2 form of the great-circle formula.
//!
//! Unlike the arccosine form, `atan2(√α, β)` keeps full precision for both nearly
//! coincident and nearly antipodal points.

use geodist_coords::Coordinate;
use geodist_core::angle::to_radians;
use geodist_core::constants::EARTH_RADIUS_M;
use serde::Serialize;
use tracing::debug;

/// A non-negative length in metres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Wrap a length in metres. Negative and non-finite input collapses to zero.
    pub fn from_meters(meters: f64) -> Self {
        if meters.is_finite() && meters > 0.0 {
            Distance(meters)
        } else {
            Distance::ZERO
        }
    }

    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Central angle (radians) between two points on the unit sphere.
pub fn central_angle(from: &Coordinate, to: &Coordinate) -> f64 {
    let from_lat = to_radians(from.latitude);
    let from_lon = to_radians(from.longitude);
    let to_lat = to_radians(to.latitude);
    let to_lon = to_radians(to.longitude);
    let delta_lon = to_lon - from_lon;

    let (sin_from_lat, cos_from_lat) = from_lat.sin_cos();
    let (sin_to_lat, cos_to_lat) = to_lat.sin_cos();
    let (sin_delta, cos_delta) = delta_lon.sin_cos();

    let alpha = (cos_to_lat * sin_delta).powi(2)
        + (cos_from_lat * sin_to_lat - sin_from_lat * cos_to_lat * cos_delta).powi(2);
    let beta = sin_from_lat * sin_to_lat + cos_from_lat * cos_to_lat * cos_delta;

    alpha.sqrt().atan2(beta)
}

/// Great-circle distance between two validated coordinates.
///
/// Identical points short-circuit to zero without touching the trigonometric path.
pub fn compute_distance(from: &Coordinate, to: &Coordinate) -> Distance {
    if from == to {
        debug!(
            latitude = from.latitude,
            longitude = from.longitude,
            "coincident points, distance is zero"
        );
        return Distance::ZERO;
    }

    let meters = central_angle(from, to) * EARTH_RADIUS_M;
    debug!(
        from_lat = from.latitude,
        from_lon = from.longitude,
        to_lat = to.latitude,
        to_lon = to.longitude,
        meters,
        "computed great-circle distance"
    );
    Distance::from_meters(meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid coordinate")
    }

    #[test]
    fn montreal_short_hop() {
        let d = compute_distance(&point(45.4987, -73.5703), &point(45.5569, -73.7480));
        assert!((d.meters() - 15_297.83).abs() < 1.0, "meters = {}", d.meters());
    }

    #[test]
    fn quarter_meridian_matches_radius() {
        let d = compute_distance(&point(0.0, 0.0), &point(90.0, 0.0));
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_M;
        assert!((d.meters() - expected).abs() < 1e-6);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = compute_distance(&point(0.0, 0.0), &point(0.0, 180.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d.meters() - expected).abs() < 1e-6);
    }

    #[test]
    fn coincident_points_are_zero() {
        let p = point(45.5, -73.5);
        assert!(compute_distance(&p, &p).is_zero());
    }

    #[test]
    fn distance_constructor_clamps() {
        assert_eq!(Distance::from_meters(-1.0), Distance::ZERO);
        assert_eq!(Distance::from_meters(f64::NAN), Distance::ZERO);
        assert_eq!(Distance::from_meters(12.5).meters(), 12.5);
    }
}
