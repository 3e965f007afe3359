use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use org_chart::chart::OrgChart;
use org_chart::loader;
use org_chart::models::sample_chart;
use org_chart::steps::Step;

#[derive(Parser)]
#[command(name = "orgchart")]
#[command(about = "Move employees around an organization chart, with undo and redo")]
struct Cli {
    /// JSON chart to start from. Defaults to the built-in sample chart.
    #[arg(short, long)]
    chart: Option<PathBuf>,

    /// Steps applied in order: `move:<employee>:<supervisor>`, `undo` or `redo`
    steps: Vec<Step>,
}

/// Initialize tracing on stderr so stdout only carries the resulting chart.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "org_chart=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let ceo = match &cli.chart {
        Some(path) => loader::load_chart(path)
            .with_context(|| format!("Failed to load chart from {}", path.display()))?,
        None => sample_chart(),
    };

    let mut chart = OrgChart::new(ceo);
    for step in &cli.steps {
        step.apply(&mut chart);
    }

    tracing::info!(
        steps = cli.steps.len(),
        undoable = chart.undo_depth(),
        redoable = chart.redo_depth(),
        "Applied steps"
    );

    let json = serde_json::to_string_pretty(chart.ceo()).context("Failed to serialize chart")?;
    println!("{}", json);

    Ok(())
}
