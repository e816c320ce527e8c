use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadgraph_cli::commands::{
    handle_compare_command, handle_route_command, handle_stats_command, MapArgs,
};
use roadgraph_cli::output::OutputFormat;
use roadgraph_lib::{GeoPoint, RouteAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road map routing utilities")]
struct Cli {
    /// Road map file to load. Falls back to the ROADGRAPH_MAP environment variable.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Treat every map line as a two-way road.
    #[arg(long, global = true)]
    bidirectional: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two intersections.
    Route {
        /// Starting intersection as LAT,LON.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: GeoPoint,
        /// Destination intersection as LAT,LON.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: GeoPoint,
        /// Search algorithm (bfs, dijkstra, a-star).
        #[arg(long, default_value_t = RouteAlgorithm::AStar)]
        algorithm: RouteAlgorithm,
    },
    /// Run every algorithm on the same query and compare search effort.
    Compare {
        /// Starting intersection as LAT,LON.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: GeoPoint,
        /// Destination intersection as LAT,LON.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: GeoPoint,
    },
    /// Print vertex and edge counts for the loaded map.
    Stats {
        /// Also dump every vertex and edge.
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let map = MapArgs {
        path: cli.map,
        bidirectional: cli.bidirectional,
    };

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(&map, cli.format, from, to, algorithm),
        Command::Compare { from, to } => handle_compare_command(&map, cli.format, from, to),
        Command::Stats { dump } => handle_stats_command(&map, cli.format, dump),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
