//! Day-by-day itinerary assembly.
//!
//! Ties the quota allocator, theme sequencing, bucket selection and
//! nearest-neighbor ordering together into one deterministic pass.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::distance::{HaversineMetric, PlanarMetric};
use crate::error::PlanError;
use crate::place::{Place, PlaceKey};
use crate::polyline::Polyline;
use crate::pool::{ThemeAlias, ThemeBucketPool};
use crate::quota::{
    allocate_quota, default_theme_weights, validate_duration, validate_weights, IntensityBands,
    ThemeWeight,
};
use crate::route::order_by_nearest_neighbor_with;
use crate::sequence::build_theme_sequence;

const DEFAULT_INTENSITY: i64 = 50;

/// Metric used to order each day's stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMetric {
    /// Squared Euclidean distance on raw coordinates.
    #[default]
    Planar,
    /// Great-circle distance, reading coordinates as longitude/latitude.
    Haversine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Intensity to stops-per-day mapping.
    pub bands: IntensityBands,
    /// Weights used when a request carries none.
    pub default_weights: Vec<ThemeWeight>,
    /// Extra themes that can fill a quota theme's slots.
    pub theme_aliases: Vec<ThemeAlias>,
    pub metric: RouteMetric,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            bands: IntensityBands::default(),
            default_weights: default_theme_weights(),
            theme_aliases: vec![
                ThemeAlias::new("bar", "restaurant"),
                ThemeAlias::new("eatery", "restaurant"),
            ],
            metric: RouteMetric::Planar,
        }
    }
}

/// Structured preferences produced upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Trip length in days, between 1 and [`MAX_DURATION`](crate::quota::MAX_DURATION).
    pub duration: i64,
    /// 0-100; values outside the range are clamped.
    #[serde(default = "default_intensity")]
    pub intensity: i64,
    #[serde(default)]
    pub theme_weights: Vec<ThemeWeight>,
}

fn default_intensity() -> i64 {
    DEFAULT_INTENSITY
}

impl TripRequest {
    pub fn new(duration: i64, intensity: i64) -> Self {
        Self {
            duration,
            intensity,
            theme_weights: Vec::new(),
        }
    }

    pub fn with_weight(mut self, theme: impl Into<String>, weight: f64) -> Self {
        self.theme_weights.push(ThemeWeight::new(theme, weight));
        self
    }

    /// Checks duration and weights without touching any places.
    ///
    /// [`plan_itinerary`] runs the same checks; calling this first lets a
    /// host reject a bad request before paying for a place search.
    pub fn validate(&self) -> Result<(), PlanError> {
        validate_duration(self.duration)?;
        validate_weights(&self.theme_weights)
    }

    /// Parses a request from JSON. A non-numeric weight is a malformed request.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One visit within a day, numbered from 1 in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub order: usize,
    pub place: Place,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: usize,
    pub stops: Vec<Stop>,
}

impl DayPlan {
    /// Number of stops, anchor included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.stops.iter().map(|stop| &stop.place)
    }

    pub fn contains(&self, key: &PlaceKey) -> bool {
        self.places().any(|place| place.key() == *key)
    }

    /// Stop coordinates in visiting order.
    pub fn polyline(&self) -> Polyline {
        Polyline::new(self.places().map(Place::position).collect())
    }
}

/// A whole trip: exactly one [`DayPlan`] per day, even when some are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, day: usize) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    pub fn total_stops(&self) -> usize {
        self.days.iter().map(DayPlan::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter()
    }
}

/// Builds the day-by-day itinerary.
///
/// The theme quota is computed once and reused for every day. Each day
/// gets at most one anchor (consumed in input order) on top of its quota,
/// then one place per theme slot drawn from the shared pool, then the
/// day's places are reordered by nearest neighbor starting from the first
/// one collected. When the pool runs dry days come out short or empty;
/// that is not an error.
pub fn plan_itinerary(
    request: &TripRequest,
    places: Vec<Place>,
    anchors: Vec<Place>,
    options: &PlanOptions,
) -> Result<Itinerary, PlanError> {
    let quota = allocate_quota(
        &request.theme_weights,
        request.intensity,
        request.duration,
        &options.bands,
        &options.default_weights,
    )?;

    if places.iter().chain(anchors.iter()).any(|place| place.name.trim().is_empty()) {
        return Err(PlanError::EmptyPlaceName);
    }

    let duration = usize::try_from(request.duration)
        .map_err(|_| PlanError::InvalidDuration(request.duration))?;
    let candidate_count = places.len();
    let mut pool = ThemeBucketPool::new(places).with_aliases(&options.theme_aliases);
    let mut anchors = assign_anchors(anchors, duration, &mut pool);
    let sequence = build_theme_sequence(&quota);

    let mut days = Vec::with_capacity(duration);
    for day in 1..=duration {
        let mut day_places: Vec<Place> = Vec::with_capacity(sequence.len() + 1);
        if let Some(anchor) = anchors.pop_front() {
            debug!(day, anchor = %anchor.name, "attached anchor");
            day_places.push(anchor);
        }

        let mut filled = 0;
        for theme in &sequence {
            let Some(place) = pool.take_one(theme) else {
                break;
            };
            let key = place.key();
            if day_places.iter().any(|existing| existing.key() == key) {
                continue;
            }
            day_places.push(place);
            filled += 1;
        }

        if filled < sequence.len() {
            warn!(day, filled, quota = sequence.len(), "candidate pool ran short");
        }

        let ordered = match options.metric {
            RouteMetric::Planar => order_by_nearest_neighbor_with(day_places, &PlanarMetric),
            RouteMetric::Haversine => order_by_nearest_neighbor_with(day_places, &HaversineMetric),
        };
        let stops = ordered
            .into_iter()
            .enumerate()
            .map(|(i, place)| Stop { order: i + 1, place })
            .collect::<Vec<_>>();
        debug!(day, stops = stops.len(), "assembled day");

        days.push(DayPlan { day, stops });
    }

    let itinerary = Itinerary { days };
    info!(
        days = itinerary.len(),
        stops = itinerary.total_stops(),
        candidates = candidate_count,
        "planned itinerary"
    );
    Ok(itinerary)
}

/// Picks one anchor per day in input order and reserves each out of the pool.
///
/// Repeated anchors are skipped. Anchors beyond the trip length are left
/// alone, so they stay drawable as ordinary candidates.
fn assign_anchors(anchors: Vec<Place>, duration: usize, pool: &mut ThemeBucketPool) -> VecDeque<Place> {
    let mut assigned = VecDeque::with_capacity(duration.min(anchors.len()));
    for anchor in anchors {
        if assigned.len() == duration {
            break;
        }
        if pool.reserve(&anchor.key()) {
            assigned.push_back(anchor);
        }
    }
    assigned
}
