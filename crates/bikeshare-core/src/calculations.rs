//! Group-by and aggregate helpers shared by the statistics reporters.
//!
//! Every helper tolerates empty input: aggregates that have no defined value
//! for an empty series return `None` instead of panicking.

use std::collections::BTreeMap;

// ── Frequency ─────────────────────────────────────────────────────────────────

/// Count occurrences of each distinct value.
///
/// Sorted by count descending; equal counts are ordered by the value
/// ascending so the output is reproducible.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // BTreeMap order is ascending by value; a stable sort keeps it for ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` for an empty series.
///
/// Ties go to the smallest value.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        // Strictly greater: the first (smallest) value keeps a tie.
        let better = best.as_ref().map_or(true, |(_, n)| count > *n);
        if better {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

fn tally<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

// ── Numeric ───────────────────────────────────────────────────────────────────

/// Sum of `values`; `0.0` for an empty series.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean, or `None` for an empty series.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Smallest and largest value, or `None` for an empty series.
pub fn min_max<T, I>(values: I) -> Option<(T, T)>
where
    T: Ord + Copy,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
