//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use roadgraph_lib::{GeoPoint, RoadGraph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the small hand-checked road map.
#[allow(dead_code)]
pub fn simpletest_map() -> PathBuf {
    fixtures_dir().join("simpletest.map")
}

/// Named intersections of `simpletest.map`.
#[allow(dead_code)]
pub mod simpletest {
    use roadgraph_lib::GeoPoint;

    pub const A: GeoPoint = GeoPoint::new(1.0, 1.0);
    pub const B: GeoPoint = GeoPoint::new(4.0, 1.0);
    pub const C: GeoPoint = GeoPoint::new(4.0, 2.0);
    pub const D: GeoPoint = GeoPoint::new(5.0, 1.0);
    pub const E: GeoPoint = GeoPoint::new(7.0, 3.0);
    pub const F: GeoPoint = GeoPoint::new(8.0, -1.0);
    pub const G: GeoPoint = GeoPoint::new(4.0, -1.0);
    pub const H: GeoPoint = GeoPoint::new(6.5, 0.0);
    pub const ISLAND: GeoPoint = GeoPoint::new(20.0, 20.0);
}

/// Build a graph from `(from, to, length)` triples, adding vertices on demand.
#[allow(dead_code)]
pub fn graph_from_roads(roads: &[(GeoPoint, GeoPoint, f64)]) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for &(from, to, length) in roads {
        if !graph.is_vertex(&from) {
            graph.add_vertex(from);
        }
        if !graph.is_vertex(&to) {
            graph.add_vertex(to);
        }
        graph
            .add_edge(from, to, "Test Road", "residential", Some(length))
            .expect("endpoints were just added");
    }
    graph
}

/// Generate a `size` x `size` grid of intersections with randomly directed
/// roads between orthogonal neighbours. Each road is at least as long as the
/// straight-line distance between its endpoints, which keeps the A* estimate
/// admissible.
#[allow(dead_code)]
pub fn random_grid(seed: u64, size: usize) -> (RoadGraph, Vec<GeoPoint>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();
    let points: Vec<GeoPoint> = (0..size * size)
        .map(|i| GeoPoint::new((i / size) as f64 * 0.01, (i % size) as f64 * 0.01))
        .collect();
    for point in &points {
        graph.add_vertex(*point);
    }

    for row in 0..size {
        for col in 0..size {
            let here = row * size + col;
            let mut neighbours = Vec::new();
            if col + 1 < size {
                neighbours.push(here + 1);
            }
            if row + 1 < size {
                neighbours.push(here + size);
            }
            for there in neighbours {
                let (a, b) = (points[here], points[there]);
                let base = a.distance(&b);
                // 0: a -> b, 1: b -> a, 2: both, 3: no road.
                match rng.random_range(0..4) {
                    0 => add_road(&mut graph, a, b, base, &mut rng),
                    1 => add_road(&mut graph, b, a, base, &mut rng),
                    2 => {
                        add_road(&mut graph, a, b, base, &mut rng);
                        add_road(&mut graph, b, a, base, &mut rng);
                    }
                    _ => {}
                }
            }
        }
    }

    (graph, points)
}

#[allow(dead_code)]
fn add_road(graph: &mut RoadGraph, from: GeoPoint, to: GeoPoint, base: f64, rng: &mut SmallRng) {
    let length = base * (1.0 + 2.0 * rng.random::<f64>());
    graph
        .add_edge(from, to, "Grid Road", "residential", Some(length))
        .expect("grid vertices exist");
}

/// Reference shortest distances from `start` by Bellman-Ford relaxation.
/// With `unit` set every road counts as one hop.
#[allow(dead_code)]
pub fn reference_distance(
    graph: &RoadGraph,
    start: GeoPoint,
    goal: GeoPoint,
    unit: bool,
) -> Option<f64> {
    use std::collections::HashMap;

    let mut best: HashMap<GeoPoint, f64> = HashMap::from([(start, 0.0)]);
    for _ in 0..graph.num_vertices() {
        let mut changed = false;
        for edge in graph.edges() {
            let Some(&from) = best.get(&edge.start) else {
                continue;
            };
            let step = if unit { 1.0 } else { edge.length };
            let candidate = from + step;
            if candidate < best.get(&edge.end).copied().unwrap_or(f64::INFINITY) {
                best.insert(edge.end, candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    best.get(&goal).copied()
}

/// Assert that consecutive locations of `path` are joined by directed roads.
#[allow(dead_code)]
pub fn assert_connected(graph: &RoadGraph, path: &[GeoPoint]) {
    for pair in path.windows(2) {
        assert!(
            graph.neighbours(&pair[0]).contains(&pair[1]),
            "no road from {} to {}",
            pair[0],
            pair[1]
        );
    }
}
