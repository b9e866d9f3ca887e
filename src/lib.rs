//! Synthetic clustered vector datasets with a block-mean 3D projection,
//! built for feeding scatter-plot visualizations.
//!
//! Two independent components: [`dataset::generate`] produces labeled
//! vectors grouped around per-cluster centers with randomized metadata, and
//! [`project::project`] reduces each vector to a 3D position by averaging
//! three contiguous dimension blocks. [`service`] carries the wire contract
//! for a network layer, [`legend`] derives color mappings, and [`chart`]
//! renders projected batches.

pub mod chart;
pub mod dataset;
pub mod error;
pub mod legend;
pub mod metadata;
pub mod project;
pub mod service;
pub mod utils;

pub use dataset::{generate, DatasetConfig, VectorItem};
pub use error::{ScatterError, ScatterResult};
pub use project::{project, ProjectedVectorItem};

pub mod prelude {
    pub use crate::chart::{chart_items, ChartConfig};
    pub use crate::dataset::{generate, DatasetConfig, VectorItem};
    pub use crate::error::{ScatterError, ScatterResult};
    pub use crate::legend::{color_map, discover_label_fields, rank_clusters};
    pub use crate::project::{project, project_vector, ProjectedVectorItem};
    pub use crate::service::{handle_vectors, VectorQuery};

    /// Generate a batch and project it in one call.
    ///
    /// ```
    /// use fast_scatter::prelude::*;
    ///
    /// let projected = scatter(100, 16).unwrap();
    /// assert_eq!(projected.len(), 100);
    /// ```
    pub fn scatter(
        num_samples: usize,
        num_dimensions: usize,
    ) -> ScatterResult<Vec<ProjectedVectorItem>> {
        let config = DatasetConfig::builder()
            .num_samples(num_samples)
            .num_dimensions(num_dimensions)
            .build()?;
        let items = generate(&config)?;
        project(&items)
    }
}
