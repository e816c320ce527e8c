use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Length assigned to a road segment when the caller does not supply one.
pub const DEFAULT_ROAD_LENGTH: f64 = 0.01;

/// Dense index of a vertex inside a [`RoadGraph`].
pub(crate) type VertexId = usize;

/// Dense index of an edge inside a [`RoadGraph`].
pub(crate) type EdgeId = usize;

/// Directed road segment between two intersections.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub road_name: String,
    pub road_type: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub length: f64,
    pub(crate) target: VertexId,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[EDGE {} ({}) from ({}) to ({}), length {}]",
            self.road_name, self.road_type, self.start, self.end, self.length
        )
    }
}

/// Road intersection. Outgoing edges are kept in insertion order.
#[derive(Debug, Clone)]
pub struct Vertex {
    location: GeoPoint,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    fn new(location: GeoPoint) -> Self {
        Self {
            location,
            outgoing: Vec::new(),
        }
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Number of road segments leaving this intersection.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }
}

// Vertices are identified by location alone; edge lists may differ while a
// graph is still being built.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for Vertex {}

/// Road network keyed by intersection coordinates.
///
/// The graph is built once with [`RoadGraph::add_vertex`] and
/// [`RoadGraph::add_edge`] and then queried through `&self`. Searches keep
/// all of their bookkeeping in call-local maps, so any number of queries may
/// share one graph.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    vertices: Vec<Vertex>,
    index: HashMap<GeoPoint, VertexId>,
    edges: Vec<Edge>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intersections in the graph.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed road segments in the graph.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add an intersection at `location`.
    ///
    /// Returns `false` and leaves the existing vertex untouched when the
    /// location is already present. Non-finite locations are never added.
    pub fn add_vertex(&mut self, location: GeoPoint) -> bool {
        if !location.is_finite() {
            warn!("ignoring vertex at non-finite location {}", location);
            return false;
        }
        if self.index.contains_key(&location) {
            warn!("vertex at {} already exists in the graph", location);
            return false;
        }

        let id = self.vertices.len();
        self.vertices.push(Vertex::new(location));
        self.index.insert(location, id);
        true
    }

    /// Add a directed road segment from `from` to `to`.
    ///
    /// Both endpoints must already be vertices. `length` defaults to
    /// [`DEFAULT_ROAD_LENGTH`] and must be positive and finite.
    pub fn add_edge(
        &mut self,
        from: GeoPoint,
        to: GeoPoint,
        road_name: impl Into<String>,
        road_type: impl Into<String>,
        length: Option<f64>,
    ) -> Result<()> {
        let source = self
            .vertex_id(&from)
            .ok_or(Error::MissingVertex { location: from })?;
        let target = self
            .vertex_id(&to)
            .ok_or(Error::MissingVertex { location: to })?;

        let length = length.unwrap_or(DEFAULT_ROAD_LENGTH);
        if !(length.is_finite() && length > 0.0) {
            return Err(Error::InvalidLength { from, to, length });
        }

        let edge_id: EdgeId = self.edges.len();
        self.edges.push(Edge {
            road_name: road_name.into(),
            road_type: road_type.into(),
            start: from,
            end: to,
            length,
            target,
        });
        self.vertices[source].outgoing.push(edge_id);
        Ok(())
    }

    /// Whether an intersection exists at `location`.
    pub fn is_vertex(&self, location: &GeoPoint) -> bool {
        self.index.contains_key(location)
    }

    /// Locations of every intersection, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.vertices.iter().map(Vertex::location)
    }

    /// Every road segment, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Road segments leaving `location`; empty when the location is unknown.
    pub fn outgoing(&self, location: &GeoPoint) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex_id(location)
            .into_iter()
            .flat_map(move |id| self.outgoing_edges(id))
    }

    /// Intersections reachable in one hop from `location`.
    pub fn neighbours(&self, location: &GeoPoint) -> Vec<GeoPoint> {
        self.outgoing(location).map(|edge| edge.end).collect()
    }

    /// Vertex at `location`, if any.
    pub fn vertex(&self, location: &GeoPoint) -> Option<&Vertex> {
        self.vertex_id(location).map(|id| &self.vertices[id])
    }

    /// Total length of `path`, taking the shortest road between each pair of
    /// consecutive locations. Returns `None` if some pair is not joined by a
    /// directed road.
    pub fn path_length(&self, path: &[GeoPoint]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, pair| {
            self.outgoing(&pair[0])
                .filter(|edge| edge.end == pair[1])
                .map(|edge| edge.length)
                .min_by(f64::total_cmp)
                .map(|length| total + length)
        })
    }

    pub(crate) fn vertex_id(&self, location: &GeoPoint) -> Option<VertexId> {
        self.index.get(location).copied()
    }

    pub(crate) fn location(&self, id: VertexId) -> GeoPoint {
        self.vertices[id].location
    }

    pub(crate) fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices[id]
            .outgoing
            .iter()
            .map(move |&edge_id| &self.edges[edge_id])
    }
}

impl fmt::Display for RoadGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} vertices:", self.num_vertices())?;
        for vertex in &self.vertices {
            let roads: Vec<&str> = vertex
                .outgoing
                .iter()
                .map(|&edge_id| self.edges[edge_id].road_name.as_str())
                .collect();
            writeln!(
                f,
                "[VERTEX at ({}) roads: {}]",
                vertex.location,
                roads.join(", ")
            )?;
        }

        writeln!(f, "There are {} edges:", self.num_edges())?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_compare_by_location_only() {
        let mut a = Vertex::new(GeoPoint::new(1.0, 2.0));
        let b = Vertex::new(GeoPoint::new(1.0, 2.0));
        a.outgoing.push(0);
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_vertices_and_edges() {
        let mut graph = RoadGraph::new();
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        graph.add_vertex(a);
        graph.add_vertex(b);
        graph
            .add_edge(a, b, "Main St", "residential", Some(1.5))
            .expect("endpoints exist");

        let dump = graph.to_string();
        assert!(dump.contains("There are 2 vertices:"));
        assert!(dump.contains("roads: Main St"));
        assert!(dump.contains("There are 1 edges:"));
        assert!(dump.contains("[EDGE Main St (residential)"));
    }
}
