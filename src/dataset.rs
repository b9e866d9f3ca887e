//! Synthetic dataset generation.
//!
//! Each call builds one cluster center per name in [`CLUSTER_NAMES`], then
//! generates every item near the center of its primary cluster. Centers are
//! scoped to the call: nothing is retained between generations, and no
//! process-wide state is read or written.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScatterError, ScatterResult};
use crate::metadata::Metadata;
use crate::utils::{random_key, random_subset};

/// Cluster-name vocabulary; items belong to 1-3 of these.
pub const CLUSTER_NAMES: [&str; 10] = [
    "Group A", "Group B", "Group C", "Group D", "Group E", "Group F", "Group G", "Group H",
    "Group I", "Group J",
];

/// Length of the random alphanumeric item key.
pub const KEY_LENGTH: usize = 8;

/// Default number of items per batch.
pub const DEFAULT_NUM_SAMPLES: usize = 500;

/// Default vector dimensionality.
pub const DEFAULT_NUM_DIMENSIONS: usize = 100;

/// Half-width of the uniform noise added around a cluster center.
const NOISE_AMPLITUDE: f64 = 0.25;

/// A single labeled vector with randomized metadata.
///
/// Immutable once generated; the serialized form matches the wire format
/// (`id`, `key`, `vector`, `metadata`, `clusters`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorItem {
    /// Ordinal position in the batch, as a string.
    pub id: String,
    /// Random alphanumeric token; collisions are unlikely within one batch.
    pub key: String,
    pub vector: Vec<f64>,
    pub metadata: Metadata,
    /// 1-3 distinct names from [`CLUSTER_NAMES`]; the first is the primary
    /// cluster that seeded the vector.
    pub clusters: Vec<String>,
}

/// Configuration for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Number of items to generate. Zero is allowed and yields an empty batch.
    pub num_samples: usize,
    /// Vector dimensionality. Must be at least 1; at least 3 for the
    /// projection to be meaningful.
    pub num_dimensions: usize,
    /// Fixed seed for reproducible batches. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl DatasetConfig {
    /// Creates a new builder for constructing a `DatasetConfig`.
    pub fn builder() -> DatasetConfigBuilder {
        DatasetConfigBuilder::default()
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            num_samples: DEFAULT_NUM_SAMPLES,
            num_dimensions: DEFAULT_NUM_DIMENSIONS,
            seed: None,
        }
    }
}

/// Builder pattern for `DatasetConfig`.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfigBuilder {
    num_samples: Option<usize>,
    num_dimensions: Option<usize>,
    seed: Option<u64>,
}

impl DatasetConfigBuilder {
    /// Set the number of items to generate.
    pub fn num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = Some(num_samples);
        self
    }

    /// Set the vector dimensionality.
    pub fn num_dimensions(mut self, num_dimensions: usize) -> Self {
        self.num_dimensions = Some(num_dimensions);
        self
    }

    /// Set a fixed seed for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and return the final `DatasetConfig`.
    ///
    /// Fails with [`ScatterError::InvalidDimensions`] when the dimensionality
    /// is zero; unset fields fall back to the defaults (500 samples, 100
    /// dimensions, entropy seed).
    pub fn build(self) -> ScatterResult<DatasetConfig> {
        let config = DatasetConfig {
            num_samples: self.num_samples.unwrap_or(DEFAULT_NUM_SAMPLES),
            num_dimensions: self.num_dimensions.unwrap_or(DEFAULT_NUM_DIMENSIONS),
            seed: self.seed,
        };
        if config.num_dimensions == 0 {
            return Err(ScatterError::InvalidDimensions(0));
        }
        Ok(config)
    }
}

/// Generate a batch of labeled vectors with cluster-coherent structure.
///
/// One center per cluster name is drawn with components uniform in [-1, 1);
/// each item's vector is its primary cluster's center plus per-component
/// noise uniform in [-0.25, 0.25). Items are returned in index order.
///
/// With a fixed seed the batch is reproduced exactly: the master stream
/// builds the centers, and each item derives its own stream from the seed
/// and its index, so rayon's scheduling cannot reorder any draws.
pub fn generate(config: &DatasetConfig) -> ScatterResult<Vec<VectorItem>> {
    if config.num_dimensions == 0 {
        return Err(ScatterError::InvalidDimensions(0));
    }

    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(base_seed);

    // Centers are complete and read-only before any item is generated.
    let centers: Vec<Vec<f64>> = (0..CLUSTER_NAMES.len())
        .map(|_| {
            (0..config.num_dimensions)
                .map(|_| rng.random_range(-1.0..1.0))
                .collect()
        })
        .collect();

    debug!(
        num_samples = config.num_samples,
        num_dimensions = config.num_dimensions,
        seeded = config.seed.is_some(),
        "generating dataset"
    );

    let items = (0..config.num_samples)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64 + 1));
            generate_item(index, &centers, &mut rng)
        })
        .collect();

    Ok(items)
}

/// Generate a single item near the center of its primary cluster.
fn generate_item(index: usize, centers: &[Vec<f64>], rng: &mut StdRng) -> VectorItem {
    let all_indices: Vec<usize> = (0..CLUSTER_NAMES.len()).collect();
    let chosen = random_subset(rng, &all_indices, 1, 3);

    let clusters: Vec<String> = chosen
        .iter()
        .map(|&i| CLUSTER_NAMES[i].to_string())
        .collect();

    // chosen is never empty (the subset has at least one element).
    let center = &centers[chosen[0]];
    let vector: Vec<f64> = center
        .iter()
        .map(|c| c + rng.random_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE))
        .collect();

    VectorItem {
        id: index.to_string(),
        key: random_key(rng, KEY_LENGTH),
        vector,
        metadata: Metadata::random(rng),
        clusters,
    }
}
