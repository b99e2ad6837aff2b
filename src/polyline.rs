//! Path geometry for a day's visiting order.
//!
//! A polyline is just the stop coordinates in visiting order. Rendering it
//! on a map is left to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::place::Coordinate;

/// A day's route as an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from coordinates already in visiting order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// The coordinates, in visiting order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline, returning its coordinates.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Sum of segment costs under `metric`.
    ///
    /// With [`crate::distance::PlanarMetric`] this is a sum of squared
    /// segment lengths, useful for comparing orderings rather than as a length.
    pub fn length<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.points
            .windows(2)
            .map(|pair| metric.distance(pair[0], pair[1]))
            .sum()
    }
}
