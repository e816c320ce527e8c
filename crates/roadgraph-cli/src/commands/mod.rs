// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod compare;
pub mod route;
pub mod stats;

pub use compare::handle_compare_command;
pub use route::handle_route_command;
pub use stats::handle_stats_command;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use roadgraph_lib::{load_road_map, LoadOptions, RoadGraph};

/// Environment variable consulted when `--map` is not given.
pub const MAP_ENV_VAR: &str = "ROADGRAPH_MAP";

/// Map selection shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct MapArgs {
    pub path: Option<PathBuf>,
    pub bidirectional: bool,
}

impl MapArgs {
    /// Resolve the map path from `--map` or the environment.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        match std::env::var_os(MAP_ENV_VAR) {
            Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
            _ => bail!("no road map given; pass --map <PATH> or set {MAP_ENV_VAR}"),
        }
    }

    /// Load the selected map into a graph.
    pub fn load(&self) -> Result<RoadGraph> {
        let path = self.resolve_path()?;
        let options = LoadOptions {
            bidirectional: self.bidirectional,
        };
        let graph = load_road_map(&path, &options)
            .with_context(|| format!("failed to load road map from {}", path.display()))?;
        tracing::info!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "loaded {}",
            path.display()
        );
        Ok(graph)
    }
}
