//! CLI for the workforce metrics library.
//!
//! This binary lists and describes the registered metrics, and computes them
//! from a CSV export of the HR data.

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workforce::{
    Dataset, MetricCategory, MetricInfo, MetricRegistry, MonthSelection, Query, YearFilter,
    attrition::summarize,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "workforce")]
#[command(about = "Workforce metrics for HR dashboards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available metrics
    List,
    /// Show information about a specific metric
    Info {
        /// Metric name
        metric: String,
    },
    /// Compute a metric from a CSV file
    Compute {
        /// Metric to compute
        metric: String,
        /// CSV file with a header row
        #[arg(long)]
        data: PathBuf,
        /// Year to report, or "all" for the whole window
        #[arg(long, default_value = "all")]
        year: YearFilter,
        /// Restrict to resignation months (repeatable)
        #[arg(long = "month")]
        months: Vec<String>,
    },
    /// Print the headline workforce numbers
    Summary {
        /// CSV file with a header row
        #[arg(long)]
        data: PathBuf,
        /// Year to report, or "all" for the whole window
        #[arg(long, default_value = "all")]
        year: YearFilter,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = MetricRegistry::with_defaults();

    let result = match cli.command {
        Commands::List => {
            list_metrics(&registry);
            Ok(())
        }
        Commands::Info { metric } => show_metric_info(&registry, &metric),
        Commands::Compute {
            metric,
            data,
            year,
            months,
        } => compute_metric(&registry, &metric, &data, year, &months),
        Commands::Summary { data, year, json } => show_summary(&data, year, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// List all available metrics grouped by category.
fn list_metrics(registry: &MetricRegistry) {
    let mut by_category: BTreeMap<MetricCategory, Vec<MetricInfo>> = BTreeMap::new();
    for info in registry.all_info() {
        by_category.entry(info.category).or_default().push(info);
    }

    println!("Available Metrics ({} total)\n", registry.len());

    for (category, mut metrics) in by_category {
        println!("{category}:");
        metrics.sort_by(|a, b| a.name.cmp(&b.name));
        for info in metrics {
            println!("  {} - {}", info.name, info.description);
        }
        println!();
    }
}

/// Show detailed information about a specific metric.
fn show_metric_info(registry: &MetricRegistry, metric_name: &str) -> CliResult<()> {
    let info = find_info(registry, metric_name)?;

    println!("Metric: {}", info.name);
    println!("Category: {}", info.category);
    println!("Description: {}", info.description);
    println!("Required columns:");
    for col in &info.required_columns {
        println!("  - {col}");
    }
    Ok(())
}

/// Compute one metric and print the resulting frame.
fn compute_metric(
    registry: &MetricRegistry,
    metric_name: &str,
    data: &Path,
    year: YearFilter,
    months: &[String],
) -> CliResult<()> {
    // Fail on an unknown name before reading the file
    find_info(registry, metric_name)?;

    let dataset = load(data)?;
    let query = Query::new(year).with_months(MonthSelection::from_labels(months)?);
    let frame = registry.compute(metric_name, &dataset, &query)?;

    println!("{metric_name} ({year})");
    println!("{frame}");
    Ok(())
}

/// Print the headline numbers as text or JSON.
fn show_summary(data: &Path, year: YearFilter, json: bool) -> CliResult<()> {
    let dataset = load(data)?;
    let summary = summarize(dataset.records(), &Query::new(year));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Workforce summary ({})", summary.year);
    println!("  Active employees: {}", summary.active_employees);
    println!("  Leavers:          {}", summary.leavers);
    println!("  Joins:            {}", summary.joins);
    println!("  Retention rate:   {}", summary.retention_rate);
    println!("  Attrition rate:   {}", summary.attrition_rate);
    println!("  Net change:       {:+}", summary.net_change);
    Ok(())
}

fn load(path: &Path) -> CliResult<Dataset> {
    let dataset = Dataset::from_csv(path)?;
    info!(path = %path.display(), records = dataset.len(), "loaded dataset");
    Ok(dataset)
}

fn find_info(registry: &MetricRegistry, metric_name: &str) -> CliResult<MetricInfo> {
    let all_info = registry.all_info();
    if let Some(info) = all_info.iter().find(|info| info.name == metric_name) {
        return Ok(info.clone());
    }

    let mut names: Vec<_> = all_info.iter().map(|info| info.name.as_str()).collect();
    names.sort_unstable();
    Err(format!(
        "metric '{metric_name}' not found\n\nAvailable metrics:\n  {}",
        names.join("\n  ")
    )
    .into())
}
