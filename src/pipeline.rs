//! Wires external collaborators into the planner.

use rayon::prelude::*;
use tracing::debug;

use crate::error::PlanError;
use crate::place::Place;
use crate::planner::{plan_itinerary, Itinerary, PlanOptions, TripRequest};
use crate::traits::{AnchorSelector, PlaceSource};

/// Fetches candidates, selects anchors, then builds the itinerary.
#[derive(Debug, Clone)]
pub struct TripPlanner<S, A> {
    source: S,
    anchors: A,
    options: PlanOptions,
}

impl<S, A> TripPlanner<S, A>
where
    S: PlaceSource,
    A: AnchorSelector,
{
    pub fn new(source: S, anchors: A, options: PlanOptions) -> Self {
        Self {
            source,
            anchors,
            options,
        }
    }

    /// Validates the request, then calls the collaborators and plans.
    ///
    /// A rejected request never reaches the place source or anchor selector.
    pub fn plan(&self, request: &TripRequest) -> Result<Itinerary, PlanError> {
        request.validate()?;
        let candidates = self.source.candidates(request)?;
        let anchors = self.anchors.select(request, &candidates)?;
        debug!(
            candidates = candidates.len(),
            anchors = anchors.len(),
            "collaborators returned"
        );
        plan_itinerary(request, candidates, anchors, &self.options)
    }
}

/// Inputs for one independent planning run.
#[derive(Debug, Clone)]
pub struct PlanJob {
    pub request: TripRequest,
    pub places: Vec<Place>,
    pub anchors: Vec<Place>,
}

/// Plans several unrelated trips in parallel.
///
/// Each job builds its own pool, so nothing mutable is shared between runs.
/// Results come back in job order.
pub fn plan_many(jobs: Vec<PlanJob>, options: &PlanOptions) -> Vec<Result<Itinerary, PlanError>> {
    jobs.into_par_iter()
        .map(|job| plan_itinerary(&job.request, job.places, job.anchors, options))
        .collect()
}
