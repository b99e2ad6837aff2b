//! Candidate places and their identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A planar coordinate pair.
///
/// Search providers report these as map x/y (usually longitude/latitude);
/// the planner treats them as plain Cartesian values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    /// Creates a coordinate from map x/y (longitude/latitude for most providers).
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when this is the zero sentinel providers use for "no location".
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A candidate point of interest.
///
/// Only `name`, `theme` and `coordinate` are interpreted by the planner.
/// The remaining fields pass through untouched to the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub theme: String,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub road_address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Place {
    pub fn new(name: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme: theme.into(),
            coordinate: None,
            address: None,
            road_address: None,
            category: None,
            url: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the map position. Leave unset when the provider has none.
    pub fn with_coordinate(mut self, x: f64, y: f64) -> Self {
        self.coordinate = Some(Coordinate::new(x, y));
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Road-name address. Preferred over `address` for identity.
    pub fn with_road_address(mut self, road_address: impl Into<String>) -> Self {
        self.road_address = Some(road_address.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Position used for routing. A missing coordinate is placed at the origin.
    pub fn position(&self) -> Coordinate {
        self.coordinate.unwrap_or(Coordinate::ORIGIN)
    }

    /// True when the place has no usable location (missing or zero sentinel).
    pub fn has_unknown_location(&self) -> bool {
        self.position().is_origin()
    }

    /// Identity used for de-duplication: name plus road address, falling back to address.
    pub fn key(&self) -> PlaceKey {
        PlaceKey {
            name: self.name.clone(),
            address: self.road_address.clone().or_else(|| self.address.clone()),
        }
    }
}

/// Identity of a place across buckets, anchors and days.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceKey {
    pub name: String,
    pub address: Option<String>,
}
