//! Stats command handler: summarises the loaded map.

use anyhow::Result;

use crate::commands::MapArgs;
use crate::output::{GraphStats, OutputFormat};

/// Handle the stats subcommand.
pub fn handle_stats_command(map: &MapArgs, format: OutputFormat, dump: bool) -> Result<()> {
    let graph = map.load()?;
    let stats = GraphStats::from_graph(&graph);
    format.render_stats(&stats)?;

    if dump && format != OutputFormat::Json {
        print!("{graph}");
    }
    Ok(())
}
