use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::RoadGraph;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line plus one numbered line per step with road names.
    PlainText,
    /// Bare list of locations, start marked `+` and goal marked `-`.
    Basic,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub location: GeoPoint,
    /// Road used to reach this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    /// Length of the road used to reach this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Structured representation of a planned route that callers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub total_length: f64,
    pub explored: usize,
    pub start: GeoPoint,
    pub goal: GeoPoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary annotated with road names.
    pub fn from_plan(graph: &RoadGraph, plan: &RoutePlan) -> Result<Self> {
        let (Some(&start), Some(&goal)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<GeoPoint> = None;
        for (index, &location) in plan.steps.iter().enumerate() {
            let edge = previous.and_then(|from| {
                graph
                    .outgoing(&from)
                    .filter(|edge| edge.end == location)
                    .min_by(|a, b| a.length.total_cmp(&b.length))
            });
            steps.push(RouteStep {
                index,
                location,
                road: edge.map(|edge| edge.road_name.clone()),
                distance: edge.map(|edge| edge.length),
            });
            previous = Some(location);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            total_length: plan.total_length,
            explored: plan.explored,
            start,
            goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: ({}) -> ({}) ({} hops, {:.3} km, explored {}, algorithm: {})",
            self.start, self.goal, self.hops, self.total_length, self.explored, self.algorithm
        );

        for step in &self.steps {
            match (&step.road, step.distance) {
                (Some(road), Some(distance)) => {
                    let road = if road.is_empty() { "<unnamed>" } else { road };
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} via {} ({:.3} km)",
                        step.index, step.location, road, distance
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.location);
                }
            }
        }

        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let last = self.steps.len().saturating_sub(1);
        for step in &self.steps {
            let marker = if step.index == 0 {
                '+'
            } else if step.index == last {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{marker} {}", step.location);
        }
        buffer
    }
}
