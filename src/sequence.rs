//! Interleaves a day's theme quota into a visiting sequence.

use crate::quota::ThemeQuota;

/// Expands a quota into an ordered list of themes, avoiding back-to-back repeats.
///
/// Each step picks the theme with the most remaining stops among those that
/// differ from the previous pick; ties go to the theme seen first in the quota.
/// When only the previous theme has stops left it is repeated.
///
/// `{restaurant: 2, cafe: 1, shopping: 2}` becomes
/// `[restaurant, shopping, restaurant, cafe, shopping]`.
pub fn build_theme_sequence(quota: &ThemeQuota) -> Vec<String> {
    let mut remaining: Vec<(&str, usize)> = quota.iter().filter(|(_, count)| *count > 0).collect();
    let mut sequence = Vec::with_capacity(quota.total());
    let mut last: Option<usize> = None;

    loop {
        let pick = most_remaining(&remaining, last).or_else(|| most_remaining(&remaining, None));
        let Some(index) = pick else {
            break;
        };
        sequence.push(remaining[index].0.to_string());
        remaining[index].1 -= 1;
        last = Some(index);
    }

    sequence
}

fn most_remaining(remaining: &[(&str, usize)], exclude: Option<usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, (_, count)) in remaining.iter().enumerate() {
        if *count == 0 || Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if remaining[b].1 >= *count => {}
            _ => best = Some(i),
        }
    }
    best
}
