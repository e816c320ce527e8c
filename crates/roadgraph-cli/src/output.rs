//! Output formatting for CLI results.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use roadgraph_lib::{
    GeoPoint, RoadGraph, RouteAlgorithm, RoutePlan, RouteRenderMode, RouteSummary,
};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route with road names.
    #[default]
    Text,
    /// Bare list of coordinates.
    Basic,
    /// Machine-readable JSON.
    Json,
}

/// One algorithm's result in a comparison run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub algorithm: RouteAlgorithm,
    /// Whether the algorithm minimises total length rather than hop count.
    pub weighted: bool,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<usize>,
}

impl ComparisonRow {
    pub fn from_plan(plan: &RoutePlan, weighted: bool) -> Self {
        Self {
            algorithm: plan.algorithm,
            weighted,
            found: true,
            hops: Some(plan.hop_count()),
            total_length: Some(plan.total_length),
            explored: Some(plan.explored),
        }
    }

    pub fn unreachable(algorithm: RouteAlgorithm, weighted: bool) -> Self {
        Self {
            algorithm,
            weighted,
            found: false,
            hops: None,
            total_length: None,
            explored: None,
        }
    }
}

/// Size summary of a loaded map.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    /// Number of edges per road type.
    pub road_types: BTreeMap<String, usize>,
}

impl GraphStats {
    pub fn from_graph(graph: &RoadGraph) -> Self {
        let mut road_types = BTreeMap::new();
        for edge in graph.edges() {
            *road_types.entry(edge.road_type.clone()).or_insert(0) += 1;
        }
        Self {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
            road_types,
        }
    }
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    start: GeoPoint,
    goal: GeoPoint,
    results: &'a [ComparisonRow],
}

impl OutputFormat {
    /// Print a route summary.
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Basic => print!("{}", summary.render(RouteRenderMode::Basic)),
            OutputFormat::Json => print_json(summary)?,
        }
        Ok(())
    }

    /// Print the results of running every algorithm on one query.
    pub fn render_comparison(
        self,
        start: GeoPoint,
        goal: GeoPoint,
        rows: &[ComparisonRow],
    ) -> Result<()> {
        if self == OutputFormat::Json {
            return print_json(&ComparisonReport {
                start,
                goal,
                results: rows,
            });
        }

        println!("Compare: ({start}) -> ({goal})");
        for row in rows {
            let minimises = if row.weighted { "length" } else { "hops" };
            match (row.hops, row.total_length, row.explored) {
                (Some(hops), Some(length), Some(explored)) => println!(
                    "{:<9} hops: {:>4}  length: {:>10.3} km  explored: {:>6}  minimises: {}",
                    row.algorithm.to_string(),
                    hops,
                    length,
                    explored,
                    minimises
                ),
                _ => println!(
                    "{:<9} no route  minimises: {}",
                    row.algorithm.to_string(),
                    minimises
                ),
            }
        }
        Ok(())
    }

    /// Print map statistics.
    pub fn render_stats(self, stats: &GraphStats) -> Result<()> {
        if self == OutputFormat::Json {
            return print_json(stats);
        }

        println!("vertices: {}", stats.vertices);
        println!("edges: {}", stats.edges);
        for (road_type, count) in &stats.road_types {
            println!("  {road_type}: {count}");
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output as JSON")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use roadgraph_lib::{parse_road_map, LoadOptions};

    #[test]
    fn stats_count_road_types() {
        let text = "1 1 2 1 \"Main\" city\n2 1 3 1 \"Main\" city\n3 1 3 2 \"Side\" residential\n";
        let graph = parse_road_map(text, &LoadOptions::default()).expect("parses");
        let stats = GraphStats::from_graph(&graph);

        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.road_types.get("city"), Some(&2));
        assert_eq!(stats.road_types.get("residential"), Some(&1));
    }

    #[test]
    fn unreachable_rows_omit_measurements() {
        let row = ComparisonRow::unreachable(RouteAlgorithm::Dijkstra, true);
        let value = serde_json::to_value(&row).expect("serialize");
        assert_eq!(value["algorithm"], "dijkstra");
        assert_eq!(value["weighted"], true);
        assert_eq!(value["found"], false);
        assert!(value.get("hops").is_none());
    }
}
