//! Streetgraph CLI: load a road network and print the shortest route
//!
//! Wires a data file and two endpoint names to the route search.

use anyhow::Result;
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use streetgraph::{LoadOptions, LoadStats, NetworkError, Profiler, RoadNetwork, Route};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streetgraph", version, about = "Shortest routes over road networks")]
struct Cli {
    /// Road network file (`from to length name` per line)
    #[arg(env = "STREETGRAPH_DATA")]
    data: PathBuf,

    /// Starting endpoint name
    start: String,

    /// Destination endpoint name
    end: String,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Only insert the forward direction of each road
    #[arg(long)]
    one_way: bool,

    /// Skip malformed lines instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Report load and search time
    #[arg(long)]
    profile: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<NetworkError>() {
            Some(NetworkError::FileNotFound(path)) => {
                eprintln!("Could not find file {}", path.display());
            }
            Some(NetworkError::UnknownEndpoint(name)) => {
                eprintln!("Invalid Endpoint: {}", name);
            }
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = LoadOptions {
        two_way: !cli.one_way,
        skip_malformed: cli.skip_malformed,
    };
    debug!(data = %cli.data.display(), ?options, "Loading network");

    let mut profiler = Profiler::new();
    let mut network = RoadNetwork::new();
    let (stats, route) = {
        let _scope = profiler.scope()?;
        let stats = network.load_file(&cli.data, &options)?;
        let route = network.shortest_route(&cli.start, &cli.end)?;
        (stats, route)
    };
    info!(
        start = %cli.start,
        end = %cli.end,
        found = route.is_some(),
        elapsed_ms = profiler.net_time().as_millis() as u64,
        "Search complete"
    );

    match cli.format {
        OutputFormat::Json => print_json(&stats, route.as_ref())?,
        OutputFormat::Table => print_table(&stats, route.as_ref()),
    }

    if cli.profile {
        let description = format!(
            "\nRan with {} from {} to {}",
            cli.data.display(),
            cli.start,
            cli.end
        );
        println!("{}", profiler.statistics(&description));
    }

    Ok(())
}

fn print_json(stats: &LoadStats, route: Option<&Route>) -> Result<()> {
    let output = serde_json::json!({
        "load": stats,
        "route": route,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_table(stats: &LoadStats, route: Option<&Route>) {
    println!("Network Loaded!");
    println!("Loaded {} roads", stats.roads);
    println!("Loaded {} endpoints", stats.endpoints);

    let Some(route) = route else {
        println!("No path found");
        return;
    };

    println!("Total Distance: {}", route.distance);
    if route.segments.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Road", "Length"]);
    for segment in &route.segments {
        table.add_row(vec![segment.road.clone(), segment.length.to_string()]);
    }
    println!("{}", table);
}
