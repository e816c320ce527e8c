//! Plain-text road map loader.
//!
//! Each non-empty line describes one directed road segment:
//!
//! ```text
//! # lat1 lon1 lat2 lon2 "Road Name" road_type
//! 32.8648772 -117.2254046 32.8660691 -117.217393 "Gilman Dr" residential
//! ```
//!
//! Intersections are created on first use and each segment's length is the
//! great-circle distance between its endpoints. Lines starting with `#` are
//! comments.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::{RoadGraph, DEFAULT_ROAD_LENGTH};

/// Options controlling how a map file is turned into a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Add the reverse direction of every segment as well.
    pub bidirectional: bool,
}

/// One parsed line of a map file.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub road_name: String,
    pub road_type: String,
}

/// Load a road map file into a new graph.
pub fn load_road_map(path: impl AsRef<Path>, options: &LoadOptions) -> Result<RoadGraph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_map(&contents, options, Some(path))
}

/// Parse road map text into a new graph.
pub fn parse_road_map(contents: &str, options: &LoadOptions) -> Result<RoadGraph> {
    parse_map(contents, options, None)
}

fn parse_map(contents: &str, options: &LoadOptions, path: Option<&Path>) -> Result<RoadGraph> {
    let mut graph = RoadGraph::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let segment = parse_segment(line).map_err(|message| Error::MapParse {
            path: path.map(PathBuf::from),
            line: index + 1,
            message,
        })?;
        add_segment(&mut graph, &segment, options)?;
    }

    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "loaded road map"
    );
    Ok(graph)
}

fn add_segment(graph: &mut RoadGraph, segment: &RoadSegment, options: &LoadOptions) -> Result<()> {
    // Re-adding a known intersection is expected for every shared endpoint.
    if !graph.is_vertex(&segment.from) {
        graph.add_vertex(segment.from);
    }
    if !graph.is_vertex(&segment.to) {
        graph.add_vertex(segment.to);
    }

    let mut length = segment.from.distance(&segment.to);
    if length <= 0.0 {
        length = DEFAULT_ROAD_LENGTH;
    }

    graph.add_edge(
        segment.from,
        segment.to,
        segment.road_name.as_str(),
        segment.road_type.as_str(),
        Some(length),
    )?;
    if options.bidirectional {
        graph.add_edge(
            segment.to,
            segment.from,
            segment.road_name.as_str(),
            segment.road_type.as_str(),
            Some(length),
        )?;
    }
    Ok(())
}

/// Parse a single segment line.
pub fn parse_segment(line: &str) -> std::result::Result<RoadSegment, String> {
    let mut rest = line.trim();
    let mut coords = [0.0f64; 4];
    for (slot, label) in coords.iter_mut().zip(["lat1", "lon1", "lat2", "lon2"]) {
        let (token, tail) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("missing value after {label}"))?;
        let value: f64 = token
            .parse()
            .map_err(|_| format!("{label} '{token}' is not a number"))?;
        if !value.is_finite() {
            return Err(format!("{label} '{token}' is not finite"));
        }
        *slot = value;
        rest = tail.trim_start();
    }

    let quoted = rest
        .strip_prefix('"')
        .ok_or_else(|| "road name must be enclosed in double quotes".to_string())?;
    let (road_name, tail) = quoted
        .split_once('"')
        .ok_or_else(|| "unterminated road name".to_string())?;

    let road_type = tail.trim();
    if road_type.is_empty() {
        return Err("missing road type".to_string());
    }
    if road_type.split_whitespace().count() > 1 {
        return Err(format!("unexpected trailing text '{road_type}'"));
    }

    Ok(RoadSegment {
        from: GeoPoint::new(coords[0], coords[1]),
        to: GeoPoint::new(coords[2], coords[3]),
        road_name: road_name.to_string(),
        road_type: road_type.to_string(),
    })
}
