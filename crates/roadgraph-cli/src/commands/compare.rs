//! Compare command handler: runs every algorithm on one query.

use anyhow::Result;

use roadgraph_lib::routing::select_planner;
use roadgraph_lib::{
    plan_route, Error as RouteError, GeoPoint, RouteAlgorithm, RoutePlanner, RouteRequest,
};

use crate::commands::route::handle_route_failure;
use crate::commands::MapArgs;
use crate::output::{ComparisonRow, OutputFormat};

/// Handle the compare subcommand.
pub fn handle_compare_command(
    map: &MapArgs,
    format: OutputFormat,
    from: GeoPoint,
    to: GeoPoint,
) -> Result<()> {
    let graph = map.load()?;

    let mut rows = Vec::with_capacity(RouteAlgorithm::ALL.len());
    for algorithm in RouteAlgorithm::ALL {
        let weighted = select_planner(algorithm).is_weighted();
        let request = RouteRequest::new(from, to, algorithm);
        match plan_route(&graph, &request) {
            Ok(plan) => rows.push(ComparisonRow::from_plan(&plan, weighted)),
            Err(RouteError::RouteNotFound { .. }) => {
                rows.push(ComparisonRow::unreachable(algorithm, weighted));
            }
            Err(err) => return Err(handle_route_failure(map, err)),
        }
    }

    format.render_comparison(from, to, &rows)
}
