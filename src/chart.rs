use plotters::prelude::*;

use crate::legend::color_map;
use crate::project::ProjectedVectorItem;

/// The default caption for the chart
const CAPTION: &str = "fast-scatter";

/// The default path where the plot will be saved
const PATH: &str = "scatter.png";

/// Configuration structure for the chart, including caption, path, width, and height
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub caption: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ChartConfig {
    /// Builder pattern for configuring the chart
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            caption: CAPTION.to_string(),
            path: PATH.to_string(),
            width: 1000,
            height: 1000,
        }
    }
}

/// Builder pattern for `ChartConfig` struct to allow flexible configuration
#[derive(Default)]
pub struct ChartConfigBuilder {
    caption: Option<String>,
    path: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl ChartConfigBuilder {
    /// Set the caption for the chart
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Set the path where the chart will be saved
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Set the width of the chart
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height of the chart
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Build and return the final `ChartConfig`
    pub fn build(self) -> ChartConfig {
        ChartConfig {
            caption: self.caption.unwrap_or_else(|| CAPTION.to_string()),
            path: self.path.unwrap_or_else(|| PATH.to_string()),
            width: self.width.unwrap_or(1000),
            height: self.height.unwrap_or(1000),
        }
    }
}

/// Render the X/Y plane of projected positions as a scatter plot.
///
/// Points are colored by primary cluster, one legend entry per cluster;
/// items without a cluster fall back to red. Returns an error for an empty
/// batch since there is no data range to plot.
pub fn chart_items(
    items: &[ProjectedVectorItem],
    config: Option<ChartConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config.unwrap_or_default();
    if items.is_empty() {
        return Err("no projected items to chart".into());
    }

    // One color per primary cluster present in the batch
    let mut labels: Vec<String> = items
        .iter()
        .filter_map(|p| p.primary_cluster.clone())
        .collect();
    labels.sort();
    labels.dedup();
    let label_colors: Vec<(String, RGBColor)> = color_map(&labels)
        .into_iter()
        .map(|(label, (r, g, b))| (label, RGBColor(r, g, b)))
        .collect();

    // Define min and max for x and y axes
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in items {
        min_x = min_x.min(p.position[0]);
        max_x = max_x.max(p.position[0]);
        min_y = min_y.min(p.position[1]);
        max_y = max_y.max(p.position[1]);
    }

    // Pad the ranges so single points and flat batches still render
    let pad = ((max_x - min_x).max(max_y - min_y) * 0.1).max(0.5);

    let root = BitMapBackend::new(&config.path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Build chart
    let mut chart = ChartBuilder::on(&root)
        .caption(config.caption.as_str(), ("sans-serif", 30))
        .margin(40)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x - pad..max_x + pad, min_y - pad..max_y + pad)?;

    // Configure the mesh (axes)
    chart
        .configure_mesh()
        .x_desc("X Axis")
        .y_desc("Y Axis")
        .x_labels(10)
        .y_labels(10)
        .draw()?;

    // One series per cluster so the legend maps colors to names
    for (label, color) in &label_colors {
        let color = *color;
        chart
            .draw_series(
                items
                    .iter()
                    .filter(|p| p.primary_cluster.as_deref() == Some(label.as_str()))
                    .map(|p| {
                        Circle::new(
                            (p.position[0], p.position[1]),
                            3,
                            ShapeStyle {
                                color: color.into(),
                                filled: false,
                                stroke_width: 1,
                            },
                        )
                    }),
            )?
            .label(label.as_str())
            .legend(move |(x, y)| {
                Circle::new(
                    (x, y),
                    3,
                    ShapeStyle {
                        color: color.into(),
                        filled: false,
                        stroke_width: 1,
                    },
                )
            });
    }

    // Items with no cluster at all
    chart.draw_series(
        items
            .iter()
            .filter(|p| p.primary_cluster.is_none())
            .map(|p| {
                Circle::new(
                    (p.position[0], p.position[1]),
                    3,
                    ShapeStyle {
                        color: RED.into(),
                        filled: false,
                        stroke_width: 1,
                    },
                )
            }),
    )?;

    // Draw the legend
    chart.configure_series_labels().draw()?;

    // Save the chart to file
    root.present()?;
    Ok(())
}
