//! Color-legend derivation for the visualization layer.
//!
//! Auxiliary aggregation over a generated batch: rank clusters by how many
//! items carry them, find metadata fields discrete enough to drive a color
//! legend, and assign each label an evenly-spaced hue.

use std::collections::{HashMap, HashSet};

use hsl::HSL;

use crate::dataset::VectorItem;

/// Saturation and lightness for legend colors; hues are spread evenly.
const LEGEND_SATURATION: f64 = 0.7;
const LEGEND_LIGHTNESS: f64 = 0.6;

/// A field qualifies for the legend when its distinct-label count falls in
/// this inclusive window.
pub const MIN_DISTINCT_LABELS: usize = 2;
pub const MAX_DISTINCT_LABELS: usize = 10;

/// Cluster names ranked by descending membership frequency.
///
/// Every cluster entry counts, not only primaries. Ties break by name so
/// the ranking is deterministic, and the result is truncated to `top_n`.
pub fn rank_clusters(items: &[VectorItem], top_n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        for cluster in &item.clusters {
            *counts.entry(cluster.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}

/// Metadata fields whose distinct label count falls within the legend
/// window, in wire field order.
///
/// Fields with any unlabelable value (continuous or compound) never
/// qualify; an empty batch yields no fields.
pub fn discover_label_fields(items: &[VectorItem]) -> Vec<String> {
    let Some(first) = items.first() else {
        return Vec::new();
    };
    let field_order: Vec<&'static str> = first.metadata.fields().into_iter().map(|(n, _)| n).collect();

    let mut distinct: HashMap<&'static str, HashSet<String>> = HashMap::new();
    let mut excluded: HashSet<&'static str> = HashSet::new();
    for item in items {
        for (name, value) in item.metadata.fields() {
            match value.label() {
                Some(label) => {
                    distinct.entry(name).or_default().insert(label);
                }
                None => {
                    excluded.insert(name);
                }
            }
        }
    }

    field_order
        .into_iter()
        .filter(|name| !excluded.contains(name))
        .filter(|name| {
            distinct
                .get(name)
                .is_some_and(|set| (MIN_DISTINCT_LABELS..=MAX_DISTINCT_LABELS).contains(&set.len()))
        })
        .map(String::from)
        .collect()
}

/// Sorted distinct labels of one metadata field across the batch.
pub fn field_labels(items: &[VectorItem], field: &str) -> Vec<String> {
    let mut labels: Vec<String> = items
        .iter()
        .flat_map(|item| {
            item.metadata
                .fields()
                .into_iter()
                .filter(|(name, _)| *name == field)
                .filter_map(|(_, value)| value.label())
        })
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

/// Assign each label a distinct RGB color.
///
/// Hues are distributed evenly across the spectrum at fixed saturation and
/// lightness, so nearby legend entries stay visually distinct.
pub fn color_map(labels: &[String]) -> Vec<(String, (u8, u8, u8))> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let hue = i as f64 * 360.0 / labels.len() as f64;
            let color = HSL {
                h: hue,
                s: LEGEND_SATURATION,
                l: LEGEND_LIGHTNESS,
            }
            .to_rgb();
            (label.clone(), color)
        })
        .collect()
}
