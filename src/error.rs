//! Error types for the planner.

use thiserror::Error;

/// Errors that reject a planning request outright.
///
/// Degenerate inputs (empty pool, all-zero weights, out-of-range intensity)
/// are not errors; they show up as shorter days in the itinerary.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("trip duration must be between 1 and {max} days, got {0}", max = crate::quota::MAX_DURATION)]
    InvalidDuration(i64),

    #[error("weight for theme `{theme}` must be a finite, non-negative number, got {weight}")]
    InvalidWeight { theme: String, weight: f64 },

    #[error("theme weight entry has an empty theme name")]
    EmptyTheme,

    #[error("place has an empty name")]
    EmptyPlaceName,

    #[error("malformed trip request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Failure reported by an external collaborator (place search, anchor selection).
#[derive(Debug, Error)]
#[error("{collaborator} failed: {message}")]
pub struct SourceError {
    pub collaborator: &'static str,
    pub message: String,
}

impl SourceError {
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}
