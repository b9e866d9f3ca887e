//! Block-averaging projection of n-dimensional vectors to 3D points.
//!
//! Not a learned or distance-preserving reduction: the vector's dimensions
//! are partitioned into three contiguous blocks and each axis is the mean
//! of one block, scaled by a fixed factor. The routine is pure, so the same
//! input always yields the same position.

use num_traits::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::VectorItem;
use crate::error::{ScatterError, ScatterResult};

/// Fixed scale applied to all three projected axes.
pub const POSITION_SCALE: f64 = 5.0;

/// A [`VectorItem`] augmented with its derived 3D position.
///
/// The source item is carried unchanged (and flattened in the serialized
/// form); `primaryCluster` is a copy of `clusters[0]` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedVectorItem {
    #[serde(flatten)]
    pub item: VectorItem,
    pub position: [f64; 3],
    #[serde(rename = "primaryCluster", skip_serializing_if = "Option::is_none")]
    pub primary_cluster: Option<String>,
}

/// Partition `n` dimensions into three contiguous block lengths.
///
/// The remainder of `n / 3` goes to the leading blocks: the first block
/// gets one extra element when `n % 3 >= 1`, the second when `n % 3 == 2`.
/// The three lengths always sum to `n`.
pub fn block_lengths(n: usize) -> (usize, usize, usize) {
    let base = n / 3;
    let rem = n % 3;
    (
        base + usize::from(rem > 0),
        base + usize::from(rem > 1),
        base,
    )
}

/// Arithmetic mean of a non-empty block, accumulated left to right.
fn block_mean<F: Float>(block: &[F]) -> F {
    let sum = block.iter().fold(F::zero(), |acc, &v| acc + v);
    sum / F::from(block.len()).unwrap()
}

/// Project one vector to a scaled 3D position.
///
/// Fails with [`ScatterError::VectorTooShort`] when the vector has fewer
/// than 3 components, rather than silently producing NaN from an empty
/// block.
pub fn project_vector(vector: &[f64]) -> ScatterResult<[f64; 3]> {
    let n = vector.len();
    if n < 3 {
        return Err(ScatterError::VectorTooShort(n));
    }

    let (x_len, y_len, _) = block_lengths(n);
    let x = block_mean(&vector[..x_len]);
    let y = block_mean(&vector[x_len..x_len + y_len]);
    let z = block_mean(&vector[x_len + y_len..]);

    Ok([x * POSITION_SCALE, y * POSITION_SCALE, z * POSITION_SCALE])
}

/// Project a single item, copying its fields and first cluster.
pub fn project_item(item: &VectorItem) -> ScatterResult<ProjectedVectorItem> {
    let position = project_vector(&item.vector)?;
    Ok(ProjectedVectorItem {
        item: item.clone(),
        position,
        primary_cluster: item.clusters.first().cloned(),
    })
}

/// Project a batch of items, preserving length and order.
///
/// Inputs are never mutated; each item's projection is independent, so the
/// batch is mapped in parallel.
pub fn project(items: &[VectorItem]) -> ScatterResult<Vec<ProjectedVectorItem>> {
    debug!(num_items = items.len(), "projecting vectors");
    items.par_iter().map(project_item).collect()
}
