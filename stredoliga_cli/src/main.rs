mod discover;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stredoliga_lib::{aggregate, build_report, parse_event, PointsTable};

/// Compile per-event IOF XML result files into one season-long CSV of
/// ranked category tables.
#[derive(Parser)]
#[command(name = "stredoliga")]
#[command(about = "Compile Stredo Liga season standings from IOF XML result files")]
struct Cli {
    /// Directory containing the per-event *.xml result files
    #[arg(long, default_value = "./results")]
    input_dir: PathBuf,

    /// Output base name; the report is written to <OUTPUT>.csv
    #[arg(long, default_value = "StredoLigaResults")]
    output: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stredoliga=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let files = discover::discover_result_files(&cli.input_dir)?;

    let points = PointsTable::default();
    let mut events = files
        .iter()
        .map(|path| parse_event(path, &points))
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by_key(|event| event.date);

    let standings = aggregate(&events);
    let report = build_report(&events, &standings);

    let out_path = PathBuf::from(format!("{}.csv", cli.output));
    output::write_report_csv(&report, &out_path)?;

    println!(
        "✓  {} written ({} categories)",
        out_path.display(),
        report.category_count
    );

    Ok(())
}
