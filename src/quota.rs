//! Quota allocation: how many stops per theme each day gets.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;

/// Longest trip accepted, in days.
///
/// Requests come from upstream extraction and are untrusted, so anything
/// longer is rejected rather than allocated.
pub const MAX_DURATION: i64 = 365;

/// Desired share of a day's stops for one theme. Weights need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeWeight {
    pub theme: String,
    pub weight: f64,
}

impl ThemeWeight {
    pub fn new(theme: impl Into<String>, weight: f64) -> Self {
        Self {
            theme: theme.into(),
            weight,
        }
    }
}

/// Weights used when the caller supplies none.
pub fn default_theme_weights() -> Vec<ThemeWeight> {
    vec![
        ThemeWeight::new("restaurant", 0.4),
        ThemeWeight::new("cafe", 0.3),
        ThemeWeight::new("shopping", 0.3),
    ]
}

/// Maps trip intensity (0-100) onto a number of stops per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityBands {
    /// Highest intensity still considered a light day.
    pub light_max: i64,
    /// Highest intensity still considered a moderate day.
    pub moderate_max: i64,
    pub light_stops: usize,
    pub moderate_stops: usize,
    pub intense_stops: usize,
}

impl Default for IntensityBands {
    fn default() -> Self {
        Self {
            light_max: 30,
            moderate_max: 60,
            light_stops: 4,
            moderate_stops: 5,
            intense_stops: 6,
        }
    }
}

impl IntensityBands {
    /// Stops per day for an intensity, clamping it into [0, 100] first.
    pub fn stops_per_day(&self, intensity: i64) -> usize {
        let intensity = clamp_intensity(intensity);
        if intensity <= self.light_max {
            self.light_stops
        } else if intensity <= self.moderate_max {
            self.moderate_stops
        } else {
            self.intense_stops
        }
    }
}

pub fn clamp_intensity(intensity: i64) -> i64 {
    intensity.clamp(0, 100)
}

/// Per-day stop counts for each theme, in first-seen theme order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeQuota {
    entries: Vec<(String, usize)>,
}

impl ThemeQuota {
    /// Builds a quota from explicit counts. Repeated themes are summed.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut quota = Self::default();
        for (theme, count) in counts {
            let theme: String = theme.into();
            match quota.entries.iter_mut().find(|(existing, _)| *existing == theme) {
                Some(entry) => entry.1 += count,
                None => quota.entries.push((theme, count)),
            }
        }
        quota
    }

    pub fn get(&self, theme: &str) -> usize {
        self.entries
            .iter()
            .find(|(existing, _)| existing == theme)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Total stops per day across all themes.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(theme, count)| (theme.as_str(), *count))
    }
}

/// Computes the frozen per-day theme quota for a trip.
///
/// Weights are normalized, multiplied by the day's stop target and rounded
/// half away from zero. The highest-weight theme is guaranteed one stop. The
/// rounded counts are then corrected toward the target one stop at a time,
/// walking themes by descending weight, so both overshoot and undershoot are
/// absorbed by the heaviest themes first.
///
/// `defaults` replaces an empty `weights` list; if it is empty too the
/// built-in [`default_theme_weights`] are used.
pub fn allocate_quota(
    weights: &[ThemeWeight],
    intensity: i64,
    duration: i64,
    bands: &IntensityBands,
    defaults: &[ThemeWeight],
) -> Result<ThemeQuota, PlanError> {
    validate_duration(duration)?;

    let builtin;
    let source: &[ThemeWeight] = if !weights.is_empty() {
        weights
    } else if !defaults.is_empty() {
        defaults
    } else {
        builtin = default_theme_weights();
        builtin.as_slice()
    };

    let mut items = merge_weights(source)?;
    normalize(&mut items);

    let target = bands.stops_per_day(intensity);
    let mut counts: Vec<usize> = items
        .iter()
        .map(|(_, weight)| (weight * target as f64).round() as usize)
        .collect();

    let heaviest = heaviest_index(&items);
    if counts[heaviest] == 0 {
        counts[heaviest] = 1;
    }

    // Stable sort keeps input order among equal weights.
    let mut by_weight: Vec<usize> = (0..items.len()).collect();
    by_weight.sort_by(|a, b| items[*b].1.total_cmp(&items[*a].1));

    let mut sum: usize = counts.iter().sum();
    while sum > target {
        for &i in &by_weight {
            if counts[i] > 0 && sum > target {
                counts[i] -= 1;
                sum -= 1;
            }
        }
    }
    while sum < target {
        for &i in &by_weight {
            if sum >= target {
                break;
            }
            counts[i] += 1;
            sum += 1;
        }
    }

    let quota = ThemeQuota {
        entries: items
            .into_iter()
            .zip(counts)
            .map(|((theme, _), count)| (theme, count))
            .collect(),
    };
    debug!(target_stops = target, quota = ?quota, "allocated theme quota");
    Ok(quota)
}

/// Rejects trip lengths outside `1..=MAX_DURATION`.
pub fn validate_duration(duration: i64) -> Result<(), PlanError> {
    if !(1..=MAX_DURATION).contains(&duration) {
        return Err(PlanError::InvalidDuration(duration));
    }
    Ok(())
}

/// Checks weights the same way [`allocate_quota`] does, without allocating.
pub fn validate_weights(weights: &[ThemeWeight]) -> Result<(), PlanError> {
    merge_weights(weights).map(|_| ())
}

/// Validates weights and folds repeated themes into their first occurrence.
fn merge_weights(weights: &[ThemeWeight]) -> Result<Vec<(String, f64)>, PlanError> {
    let mut items: Vec<(String, f64)> = Vec::with_capacity(weights.len());
    for entry in weights {
        let theme = entry.theme.trim();
        if theme.is_empty() {
            return Err(PlanError::EmptyTheme);
        }
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            return Err(PlanError::InvalidWeight {
                theme: theme.to_string(),
                weight: entry.weight,
            });
        }
        match items.iter_mut().find(|(existing, _)| existing == theme) {
            Some(item) => item.1 += entry.weight,
            None => items.push((theme.to_string(), entry.weight)),
        }
    }
    Ok(items)
}

fn normalize(items: &mut [(String, f64)]) {
    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    if total <= 0.0 {
        let equal = 1.0 / items.len() as f64;
        for item in items.iter_mut() {
            item.1 = equal;
        }
    } else {
        for item in items.iter_mut() {
            item.1 /= total;
        }
    }
}

/// Index of the highest weight, first one on ties.
fn heaviest_index(items: &[(String, f64)]) -> usize {
    let mut best = 0;
    for (i, (_, weight)) in items.iter().enumerate() {
        if *weight > items[best].1 {
            best = i;
        }
    }
    best
}
