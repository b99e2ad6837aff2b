//! Seams for the collaborators that run before planning.
//!
//! Place search and anchor selection live outside this crate (they call
//! hosted search and language-model APIs). Hosts implement these traits and
//! hand them to [`crate::pipeline::TripPlanner`]. Implementations are expected
//! to normalize whatever their backend returns into well-formed [`Place`]
//! records; the planner does not repair malformed upstream data.

use crate::error::SourceError;
use crate::place::Place;
use crate::planner::TripRequest;

/// Supplies the theme-tagged candidate pool for a trip.
pub trait PlaceSource {
    fn candidates(&self, request: &TripRequest) -> Result<Vec<Place>, SourceError>;
}

/// Picks the must-include places out of the candidates.
///
/// Returned anchors are assigned one per day in the order given.
pub trait AnchorSelector {
    fn select(&self, request: &TripRequest, candidates: &[Place]) -> Result<Vec<Place>, SourceError>;
}

impl<T: PlaceSource + ?Sized> PlaceSource for &T {
    fn candidates(&self, request: &TripRequest) -> Result<Vec<Place>, SourceError> {
        (**self).candidates(request)
    }
}

impl<T: AnchorSelector + ?Sized> AnchorSelector for &T {
    fn select(&self, request: &TripRequest, candidates: &[Place]) -> Result<Vec<Place>, SourceError> {
        (**self).select(request, candidates)
    }
}

/// A fixed candidate list, for hosts that already fetched their places.
impl PlaceSource for Vec<Place> {
    fn candidates(&self, _request: &TripRequest) -> Result<Vec<Place>, SourceError> {
        Ok(self.clone())
    }
}

/// Selects no anchors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnchors;

impl AnchorSelector for NoAnchors {
    fn select(&self, _request: &TripRequest, _candidates: &[Place]) -> Result<Vec<Place>, SourceError> {
        Ok(Vec::new())
    }
}
