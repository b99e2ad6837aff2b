//! itinerary-planner core
//!
//! Deterministic day-by-day route construction for travel itineraries:
//! theme quotas, theme interleaving, bucket selection and nearest-neighbor
//! ordering over a pool of candidate places.

pub mod error;
pub mod place;
pub mod quota;
pub mod sequence;
pub mod pool;
pub mod distance;
pub mod route;
pub mod polyline;
pub mod planner;
pub mod traits;
pub mod pipeline;

pub use error::{PlanError, SourceError};
pub use place::{Coordinate, Place, PlaceKey};
pub use planner::{plan_itinerary, DayPlan, Itinerary, PlanOptions, Stop, TripRequest};
pub use quota::{ThemeQuota, ThemeWeight, MAX_DURATION};
