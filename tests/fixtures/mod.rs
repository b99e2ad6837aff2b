//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data including:
//! - Real Seoul locations grouped by theme (coordinates from OpenStreetMap)
//! - Helpers turning them into candidate places

pub mod seoul_locations;

pub use seoul_locations::*;
