mod common;

use common::simpletest::{A, B, D, F, H};
use common::simpletest_map;
use roadgraph_lib::{
    load_road_map, plan_route, LoadOptions, RouteAlgorithm, RoutePlan, RouteRenderMode,
    RouteRequest, RouteSummary,
};

#[test]
fn summary_rejects_empty_plans() {
    let graph = load_road_map(simpletest_map(), &LoadOptions::default()).expect("fixture loads");
    let plan = RoutePlan {
        algorithm: RouteAlgorithm::Bfs,
        start: A,
        goal: A,
        steps: Vec::new(),
        total_length: 0.0,
        explored: 0,
    };

    let err = RouteSummary::from_plan(&graph, &plan).expect_err("empty plans are rejected");
    assert_eq!(format!("{err}"), "route plan was empty");
}

#[test]
fn summary_annotates_roads() {
    let graph = load_road_map(simpletest_map(), &LoadOptions::default()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::dijkstra(A, F)).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("summary builds");

    assert_eq!(summary.hops, 4);
    assert_eq!(summary.start, A);
    assert_eq!(summary.goal, F);
    let roads: Vec<Option<&str>> = summary.steps.iter().map(|s| s.road.as_deref()).collect();
    assert_eq!(
        roads,
        vec![
            None,
            Some("Main Street"),
            Some("Main Street"),
            Some("Harbor Road"),
            Some("Harbor Road"),
        ]
    );
    assert_eq!(summary.steps[1].location, B);
    assert_eq!(summary.steps[2].location, D);
    assert_eq!(summary.steps[3].location, H);
    assert!(summary.steps[0].distance.is_none());
}

#[test]
fn plain_render_lists_steps() {
    let graph = load_road_map(simpletest_map(), &LoadOptions::default()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::a_star(A, F)).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("summary builds");

    let text = summary.render(RouteRenderMode::PlainText);
    assert!(text.starts_with("Route: (1, 1) -> (8, -1) (4 hops"));
    assert!(text.contains("algorithm: a-star"));
    assert!(text.contains("  0: 1, 1\n"));
    assert!(text.contains("  4: 8, -1 via Harbor Road"));
}

#[test]
fn basic_render_marks_endpoints() {
    let graph = load_road_map(simpletest_map(), &LoadOptions::default()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::bfs(A, F)).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("summary builds");

    let text = summary.render(RouteRenderMode::Basic);
    assert_eq!(text, "+ 1, 1\n| 4, 1\n| 4, -1\n- 8, -1\n");
}

#[test]
fn summary_serializes_to_json() {
    let graph = load_road_map(simpletest_map(), &LoadOptions::default()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::bfs(A, B)).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("summary builds");

    let value = serde_json::to_value(&summary).expect("serialize");
    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["hops"], 1);
    assert_eq!(value["start"]["latitude"], 1.0);
    assert!(value["steps"][0].get("road").is_none());
    assert_eq!(value["steps"][1]["road"], "Main Street");
}
