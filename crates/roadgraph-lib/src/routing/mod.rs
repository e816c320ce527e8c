//! Route planning on top of the raw search functions.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, Dijkstra, A*)
//! - [`RouteRequest`] - A route query between two intersections
//! - [`RoutePlan`] - Planned route result with length and search effort
//! - [`plan_route`] - Main entry point for computing routes
//!
//! The searches in [`crate::path`] report "no route" as `None`; this layer
//! turns those outcomes into typed errors for callers that want them.
//!
//! # Example
//!
//! ```no_run
//! use roadgraph_lib::{load_road_map, plan_route, LoadOptions, RouteRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = load_road_map("docs/fixtures/simpletest.map", &LoadOptions::default())?;
//! let request = RouteRequest::a_star("1.0,1.0".parse()?, "8.0,-1.0".parse()?);
//! let plan = plan_route(&graph, &request)?;
//! println!("{} hops, {:.3} km", plan.hop_count(), plan.total_length);
//! # Ok(())
//! # }
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::RoadGraph;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest road segments).
    Bfs,
    /// Dijkstra's algorithm (shortest total length).
    Dijkstra,
    /// A* search (shortest total length, heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl RouteAlgorithm {
    /// Every algorithm, in the order they are usually compared.
    pub const ALL: [RouteAlgorithm; 3] = [
        RouteAlgorithm::Bfs,
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::AStar,
    ];
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "a-star" | "astar" | "a_star" | "a*" => Ok(RouteAlgorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub goal: GeoPoint,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(start: GeoPoint, goal: GeoPoint, algorithm: RouteAlgorithm) -> Self {
        Self {
            start,
            goal,
            algorithm,
        }
    }

    /// Convenience constructor for BFS routes.
    pub fn bfs(start: GeoPoint, goal: GeoPoint) -> Self {
        Self::new(start, goal, RouteAlgorithm::Bfs)
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: GeoPoint, goal: GeoPoint) -> Self {
        Self::new(start, goal, RouteAlgorithm::Dijkstra)
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(start: GeoPoint, goal: GeoPoint) -> Self {
        Self::new(start, goal, RouteAlgorithm::AStar)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: GeoPoint,
    pub goal: GeoPoint,
    pub steps: Vec<GeoPoint>,
    /// Sum of road lengths along `steps`.
    pub total_length: f64,
    /// Locations taken off the search frontier before the goal was reached.
    pub explored: usize,
}

impl RoutePlan {
    /// Number of road segments in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route for the given request.
///
/// Unlike the raw searches, unknown endpoints and unreachable goals are
/// reported as [`Error::UnknownLocation`] and [`Error::RouteNotFound`].
pub fn plan_route(graph: &RoadGraph, request: &RouteRequest) -> Result<RoutePlan> {
    for location in [request.start, request.goal] {
        if !graph.is_vertex(&location) {
            return Err(Error::UnknownLocation { location });
        }
    }

    let planner = select_planner(request.algorithm);
    let mut explored = 0usize;
    let steps = planner
        .find_path(graph, request.start, request.goal, &mut |_: &GeoPoint| explored += 1)
        .ok_or(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        })?;

    let total_length = graph.path_length(&steps).unwrap_or(f64::INFINITY);
    debug!(
        algorithm = %request.algorithm,
        explored,
        hops = steps.len().saturating_sub(1),
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        goal: request.goal,
        steps,
        total_length,
        explored,
    })
}
