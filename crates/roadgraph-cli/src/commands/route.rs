//! Route command handler for computing paths between intersections.

use anyhow::{Context, Result};

use roadgraph_lib::{
    plan_route, Error as RouteError, GeoPoint, RouteAlgorithm, RouteRequest, RouteSummary,
};

use crate::commands::MapArgs;
use crate::output::OutputFormat;

/// Handle the route subcommand.
pub fn handle_route_command(
    map: &MapArgs,
    format: OutputFormat,
    from: GeoPoint,
    to: GeoPoint,
    algorithm: RouteAlgorithm,
) -> Result<()> {
    let graph = map.load()?;
    let request = RouteRequest::new(from, to, algorithm);

    let plan = match plan_route(&graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(map, err)),
    };

    let summary = RouteSummary::from_plan(&graph, &plan)
        .context("failed to build route summary for display")?;
    format.render_route(&summary)
}

pub(crate) fn handle_route_failure(map: &MapArgs, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { location } => anyhow::anyhow!(
            "Unknown intersection ({}). Coordinates must match a map point exactly.",
            location
        ),
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(
                start,
                goal,
                map.bidirectional
            ))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_route_not_found_message(
    start: GeoPoint,
    goal: GeoPoint,
    bidirectional: bool,
) -> String {
    let mut message = format!("No route found between ({}) and ({}).", start, goal);
    if !bidirectional {
        message.push_str(
            " Roads are one-way unless listed in both directions; try --bidirectional.",
        );
    }
    message
}
