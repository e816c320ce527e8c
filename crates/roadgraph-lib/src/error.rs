use std::path::PathBuf;

use thiserror::Error;

use crate::geo::GeoPoint;

/// Convenient result alias for the road graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge references an endpoint that was never added as a vertex.
    #[error("no vertex at {location}; add vertices before edges")]
    MissingVertex { location: GeoPoint },

    /// Raised when a road segment length is not a positive, finite number.
    #[error("invalid road length {length} for segment {from} -> {to}")]
    InvalidLength {
        from: GeoPoint,
        to: GeoPoint,
        length: f64,
    },

    /// Raised when a coordinate string cannot be parsed.
    #[error("invalid coordinate '{input}': expected LAT,LON")]
    InvalidCoordinate { input: String },

    /// Raised when a route endpoint is not an intersection in the graph.
    #[error("unknown location: {location}")]
    UnknownLocation { location: GeoPoint },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: GeoPoint, goal: GeoPoint },

    /// Raised when an algorithm name is not recognised.
    #[error("unknown routing algorithm '{name}'; expected bfs, dijkstra or a-star")]
    UnknownAlgorithm { name: String },

    /// Raised when a map file line cannot be parsed.
    #[error("failed to parse map {}line {line}: {message}", format_source(.path))]
    MapParse {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("{} ", path.display()),
        None => String::new(),
    }
}
