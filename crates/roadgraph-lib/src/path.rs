use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::geo::GeoPoint;
use crate::graph::{RoadGraph, VertexId};

/// Ordering applied to the weighted search frontier.
///
/// The frontier always pops the entry with the lowest priority, so a strategy
/// decides which tentative vertex is finalized next.
pub trait PriorityStrategy {
    /// Priority of a vertex at `location` that was reached with `cost`.
    fn priority(&self, cost: f64, location: &GeoPoint) -> f64;
}

/// Dijkstra ordering: cost so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostOrder;

impl PriorityStrategy for CostOrder {
    fn priority(&self, cost: f64, _location: &GeoPoint) -> f64 {
        cost
    }
}

/// A* ordering: cost so far plus the straight-line distance to the goal.
///
/// The estimate is admissible and consistent as long as no road is shorter
/// than the great-circle distance between its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicOrder {
    goal: GeoPoint,
}

impl HeuristicOrder {
    pub fn new(goal: GeoPoint) -> Self {
        Self { goal }
    }
}

impl PriorityStrategy for HeuristicOrder {
    fn priority(&self, cost: f64, location: &GeoPoint) -> f64 {
        cost + location.distance(&self.goal)
    }
}

/// Find the path with the fewest road segments using breadth-first search.
///
/// `visit` is called with every location taken off the frontier, in order.
/// Among equally short paths the first discovered wins; discovery follows the
/// insertion order of each intersection's outgoing roads.
pub fn find_route_bfs<F>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    mut visit: F,
) -> Option<Vec<GeoPoint>>
where
    F: FnMut(&GeoPoint),
{
    let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;

    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start_id);
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        visit(&graph.location(current));

        if current == goal_id {
            return Some(reconstruct_path(graph, &parents, start_id, goal_id));
        }

        for edge in graph.outgoing_edges(current) {
            let next = edge.target;
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    debug!("no path found from {} to {}", start, goal);
    None
}

/// Find the shortest path by total road length using Dijkstra's algorithm.
pub fn find_route_dijkstra<F>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    visit: F,
) -> Option<Vec<GeoPoint>>
where
    F: FnMut(&GeoPoint),
{
    find_route_weighted(graph, start, goal, &CostOrder, visit)
}

/// Find the shortest path by total road length using A* search.
pub fn find_route_a_star<F>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    visit: F,
) -> Option<Vec<GeoPoint>>
where
    F: FnMut(&GeoPoint),
{
    find_route_weighted(graph, start, goal, &HeuristicOrder::new(goal), visit)
}

/// Best-first search shared by Dijkstra and A*.
///
/// The heap has no decrease-key: an improved vertex is pushed again and the
/// outdated entry is dropped when popped, because the vertex is already in
/// the closed set by then. `visit` is called once per finalized vertex.
pub fn find_route_weighted<P, F>(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    strategy: &P,
    mut visit: F,
) -> Option<Vec<GeoPoint>>
where
    P: PriorityStrategy + ?Sized,
    F: FnMut(&GeoPoint),
{
    let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;

    // Vertices missing from `costs` are at infinite distance.
    let mut costs: HashMap<VertexId, f64> = HashMap::new();
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut closed: HashSet<VertexId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    costs.insert(start_id, 0.0);
    queue.push(QueueEntry::new(start_id, strategy.priority(0.0, &start)));

    while let Some(entry) = queue.pop() {
        if !closed.insert(entry.node) {
            continue;
        }

        visit(&graph.location(entry.node));

        if entry.node == goal_id {
            return Some(reconstruct_path(graph, &parents, start_id, goal_id));
        }

        let Some(&current_cost) = costs.get(&entry.node) else {
            continue;
        };

        for edge in graph.outgoing_edges(entry.node) {
            let next = edge.target;
            let candidate = current_cost + edge.length;
            if candidate < costs.get(&next).copied().unwrap_or(f64::INFINITY) {
                costs.insert(next, candidate);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(
                    next,
                    strategy.priority(candidate, &edge.end),
                ));
            }
        }
    }

    debug!("no path found from {} to {}", start, goal);
    None
}

fn resolve_endpoints(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
) -> Option<(VertexId, VertexId)> {
    let Some(start_id) = graph.vertex_id(&start) else {
        debug!("start location {} is not in the graph", start);
        return None;
    };
    let Some(goal_id) = graph.vertex_id(&goal) else {
        debug!("goal location {} is not in the graph", goal);
        return None;
    };
    Some((start_id, goal_id))
}

/// Walk parent links back from `goal` and return the locations from `start`
/// to `goal` inclusive. Only called once the goal has been reached.
fn reconstruct_path(
    graph: &RoadGraph,
    parents: &HashMap<VertexId, VertexId>,
    start: VertexId,
    goal: VertexId,
) -> Vec<GeoPoint> {
    let mut path = vec![graph.location(goal)];
    let mut current = goal;
    while current != start {
        let Some(&parent) = parents.get(&current) else {
            break;
        };
        path.push(graph.location(parent));
        current = parent;
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    priority: FloatOrd,
}

impl QueueEntry {
    fn new(node: VertexId, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RoadGraph {
    /// Path with the fewest road segments from `start` to `goal`.
    pub fn bfs(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        find_route_bfs(self, start, goal, |_| {})
    }

    /// [`RoadGraph::bfs`] with a hook called for every dequeued location.
    pub fn bfs_with<F>(&self, start: GeoPoint, goal: GeoPoint, visit: F) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(&GeoPoint),
    {
        find_route_bfs(self, start, goal, visit)
    }

    /// Shortest path by total road length from `start` to `goal`.
    pub fn dijkstra(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        find_route_dijkstra(self, start, goal, |_| {})
    }

    /// [`RoadGraph::dijkstra`] with a hook called for every finalized location.
    pub fn dijkstra_with<F>(
        &self,
        start: GeoPoint,
        goal: GeoPoint,
        visit: F,
    ) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(&GeoPoint),
    {
        find_route_dijkstra(self, start, goal, visit)
    }

    /// Shortest path by total road length, guided by straight-line distance.
    pub fn a_star(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        find_route_a_star(self, start, goal, |_| {})
    }

    /// [`RoadGraph::a_star`] with a hook called for every finalized location.
    pub fn a_star_with<F>(
        &self,
        start: GeoPoint,
        goal: GeoPoint,
        visit: F,
    ) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(&GeoPoint),
    {
        find_route_a_star(self, start, goal, visit)
    }
}
