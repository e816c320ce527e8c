//! Road network routing library entry points.
//!
//! This crate models a road network as a graph of intersections keyed by
//! geographic coordinates, loads it from plain-text map files, and answers
//! shortest-path queries with breadth-first search, Dijkstra and A*.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod loader;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::{Edge, RoadGraph, Vertex, DEFAULT_ROAD_LENGTH};
pub use loader::{load_road_map, parse_road_map, LoadOptions, RoadSegment};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    find_route_a_star, find_route_bfs, find_route_dijkstra, find_route_weighted, CostOrder,
    HeuristicOrder, PriorityStrategy,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
