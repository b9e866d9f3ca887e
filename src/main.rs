use clap::Parser;
use prettytable::{row, Table};
use tracing_subscriber::EnvFilter;

use fast_scatter::chart::{chart_items, ChartConfig};
use fast_scatter::dataset::{generate, DatasetConfig};
use fast_scatter::legend::rank_clusters;
use fast_scatter::project::project;
use fast_scatter::service::{handle_vectors, VectorQuery};

/// Generate a synthetic vector dataset, project it to 3D, and preview it.
#[derive(Parser, Debug)]
#[command(name = "fast-scatter", version, about)]
struct Args {
    /// Number of items to generate
    #[arg(long, default_value_t = 500)]
    samples: usize,

    /// Vector dimensionality
    #[arg(long, default_value_t = 100)]
    dimensions: usize,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print the service JSON envelope instead of the table preview
    #[arg(long)]
    json: bool,

    /// Where to save the scatter chart
    #[arg(long, default_value = "scatter.png")]
    chart: String,

    /// Number of preview rows to print
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.json {
        // Same path a network layer would take for GET /api/vectors
        let query = VectorQuery {
            limit: args.samples,
            dimensions: args.dimensions,
        };
        let response = handle_vectors("GET", query);
        println!("{}", String::from_utf8_lossy(&response.body));
        return Ok(());
    }

    let mut builder = DatasetConfig::builder()
        .num_samples(args.samples)
        .num_dimensions(args.dimensions);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let items = generate(&config)?;
    let projected = project(&items)?;

    let mut table = Table::new();
    table.add_row(row![
        "ID",
        "Key",
        "Primary cluster",
        "Name",
        "Status",
        "Position"
    ]);
    for p in projected.iter().take(args.preview) {
        table.add_row(row![
            p.item.id,
            p.item.key,
            p.primary_cluster.as_deref().unwrap_or("-"),
            p.item.metadata.name,
            p.item.metadata.status,
            format!(
                "({:.2}, {:.2}, {:.2})",
                p.position[0], p.position[1], p.position[2]
            ),
        ]);
    }
    table.printstd();

    println!("\nTop clusters:");
    for (name, count) in rank_clusters(&items, 5) {
        println!("  {name}: {count}");
    }

    if !projected.is_empty() {
        let chart_config = ChartConfig::builder().path(&args.chart).build();
        chart_items(&projected, Some(chart_config))?;
        println!("\nChart saved to {}", args.chart);
    }

    Ok(())
}
