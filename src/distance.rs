//! Distance metrics used for ordering stops.

use crate::place::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A cost between two coordinates. Smaller is closer.
pub trait DistanceMetric {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Squared Euclidean distance on the raw coordinates.
///
/// No projection correction is applied; this is the metric the day
/// sequencer uses by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarMetric;

impl DistanceMetric for PlanarMetric {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        dx * dx + dy * dy
    }
}

/// Great-circle distance in kilometers.
///
/// Reads `x` as longitude and `y` as latitude, in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMetric;

impl HaversineMetric {
    fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
        let (lng1, lat1) = (from.x, from.y);
        let (lng2, lat2) = (to.x, to.y);

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` just past 1 for antipodal points.
        let c = 2.0 * a.min(1.0).sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceMetric for HaversineMetric {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        Self::haversine_km(from, to)
    }
}
