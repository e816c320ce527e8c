//! Route planning strategies.
//!
//! Each planner wraps one search algorithm behind the [`RoutePlanner`] trait
//! so [`super::plan_route`] does not need to know which one it is running.

use crate::geo::GeoPoint;
use crate::graph::RoadGraph;
use crate::path::{find_route_a_star, find_route_bfs, find_route_dijkstra};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// `visit` is called for every location the search takes off its
    /// frontier. Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &RoadGraph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(&GeoPoint),
    ) -> Option<Vec<GeoPoint>>;

    /// Whether the planner minimises total road length rather than hops.
    fn is_weighted(&self) -> bool {
        true
    }
}

/// Breadth-first search planner for unweighted traversal.
///
/// BFS finds the path with the fewest road segments but ignores lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(
        &self,
        graph: &RoadGraph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(&GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        find_route_bfs(graph, start, goal, visit)
    }

    fn is_weighted(&self) -> bool {
        false
    }
}

/// Dijkstra planner for weighted traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &RoadGraph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(&GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        find_route_dijkstra(graph, start, goal, visit)
    }
}

/// A* planner using great-circle distance to the goal as its heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &RoadGraph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(&GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        find_route_a_star(graph, start, goal, visit)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
