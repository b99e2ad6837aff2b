//! Per-theme queues of unconsumed candidate places.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::place::{Place, PlaceKey};

/// Lets places tagged `alias` fill slots requested for `theme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAlias {
    pub alias: String,
    pub theme: String,
}

impl ThemeAlias {
    pub fn new(alias: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            theme: theme.into(),
        }
    }
}

/// The candidate pool for one planning run.
///
/// Buckets keep the order themes were first seen in the input, and each
/// bucket is FIFO. Every place handed out (or reserved) is remembered by
/// [`PlaceKey`], so the same place is never returned twice even when the
/// input lists it under several themes.
#[derive(Debug, Default)]
pub struct ThemeBucketPool {
    buckets: Vec<(String, VecDeque<Place>)>,
    aliases: HashMap<String, String>,
    consumed: HashSet<PlaceKey>,
}

impl ThemeBucketPool {
    pub fn new(places: impl IntoIterator<Item = Place>) -> Self {
        let mut pool = Self::default();
        for place in places {
            match pool.buckets.iter_mut().find(|(theme, _)| *theme == place.theme) {
                Some((_, bucket)) => bucket.push_back(place),
                None => {
                    let theme = place.theme.clone();
                    pool.buckets.push((theme, VecDeque::from([place])));
                }
            }
        }
        pool
    }

    pub fn with_aliases(mut self, aliases: &[ThemeAlias]) -> Self {
        for alias in aliases {
            self.aliases.insert(alias.alias.clone(), alias.theme.clone());
        }
        self
    }

    /// Removes and returns the next place for `theme`.
    ///
    /// Falls back to alias buckets of `theme`, then to the first non-empty
    /// bucket of any theme. Returns `None` once the whole pool is drained.
    pub fn take_one(&mut self, theme: &str) -> Option<Place> {
        let consumed = &mut self.consumed;

        if let Some((_, bucket)) = self.buckets.iter_mut().find(|(name, _)| name == theme) {
            if let Some(place) = pop_fresh(bucket, consumed) {
                return Some(place);
            }
        }

        let aliases = &self.aliases;
        for (name, bucket) in self.buckets.iter_mut() {
            if aliases.get(name.as_str()).is_some_and(|target| target == theme) {
                if let Some(place) = pop_fresh(bucket, consumed) {
                    return Some(place);
                }
            }
        }

        for (_, bucket) in self.buckets.iter_mut() {
            if let Some(place) = pop_fresh(bucket, consumed) {
                return Some(place);
            }
        }

        None
    }

    /// Marks a place as used outside the pool (an anchor).
    ///
    /// Returns false if the place was already consumed.
    pub fn reserve(&mut self, key: &PlaceKey) -> bool {
        self.consumed.insert(key.clone())
    }

    pub fn is_consumed(&self, key: &PlaceKey) -> bool {
        self.consumed.contains(key)
    }

    /// Number of entries still drawable.
    pub fn remaining(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|(_, bucket)| bucket.iter())
            .filter(|place| !self.consumed.contains(&place.key()))
            .count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Themes in the order they were first seen.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(theme, _)| theme.as_str())
    }
}

/// Pops from the front of `bucket`, discarding entries already consumed.
fn pop_fresh(bucket: &mut VecDeque<Place>, consumed: &mut HashSet<PlaceKey>) -> Option<Place> {
    while let Some(place) = bucket.pop_front() {
        if consumed.insert(place.key()) {
            return Some(place);
        }
    }
    None
}
