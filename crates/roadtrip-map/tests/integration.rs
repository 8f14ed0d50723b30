//! Integration tests: read a sample map and plan every trip on it.

use roadtrip_map::{
    plan_trip, read_input, render_json, render_text, MapError, RoadSegment, Trip, TripMetric,
};

const SAMPLE: &str = include_str!("data/sample_map.txt");

#[test]
fn sample_map_structure() {
    let input = read_input(SAMPLE).expect("read sample");
    assert_eq!(input.map.vertex_count(), 4, "expected 4 locations");
    assert_eq!(input.map.edge_count(), 8, "expected 8 road segments");
    assert_eq!(input.trips.len(), 3);
    assert!(input.map.is_strongly_connected());
    assert!(input.map.validate().is_ok());
}

#[test]
fn sample_trips_render_like_the_console() {
    let input = read_input(SAMPLE).expect("read sample");
    let output: String = input
        .trips
        .iter()
        .map(|trip| render_text(&plan_trip(&input.map, trip).expect("plan"), 1))
        .collect();

    let expected = "\
Shortest distance from Home to Beach
  Begin at Home
  Continue to School (2.0 miles)
  Continue to Mall (3.0 miles)
  Continue to Beach (4.0 miles)
Total distance: 9.0 miles

Shortest time from Home to Beach
  Begin at Home
  Continue to Mall (6.0 miles @ 65.0mph = 5 mins 32.3 secs)
  Continue to Beach (4.0 miles @ 40.0mph = 6 mins 0.0 secs)
Total time: 11 mins 32.3 secs

Shortest distance from Beach to School
  Begin at Beach
  Continue to Mall (4.0 miles)
  Continue to School (3.0 miles)
Total distance: 7.0 miles

";
    assert_eq!(output, expected);
}

#[test]
fn closing_a_road_reroutes() {
    let mut input = read_input(SAMPLE).expect("read sample");
    input.map.remove_edge(2, 3).expect("close Mall -> Beach");

    let trip = Trip { start: 0, end: 3, metric: TripMetric::Distance };
    let err = plan_trip(&input.map, &trip).unwrap_err();
    assert!(matches!(err, MapError::Unreachable { start: 0, end: 3 }), "{err}");
    assert!(!input.map.is_strongly_connected());

    input
        .map
        .add_edge(1, 3, RoadSegment::new(20.0, 55.0))
        .expect("open School -> Beach");
    let d = plan_trip(&input.map, &trip).expect("plan");
    assert_eq!(d.total_miles, 22.0);
    assert_eq!(d.legs.iter().map(|l| l.to).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn removing_a_location_drops_its_roads() {
    let mut input = read_input(SAMPLE).expect("read sample");
    let original = input.map.clone();

    // Mall has 2 outgoing and 3 incoming segments.
    assert_eq!(input.map.remove_vertex(2).unwrap(), "Mall");
    assert_eq!(input.map.edge_count(), 3);
    assert_eq!(input.map.edges(), vec![(0, 1), (1, 0), (3, 0)]);

    assert_eq!(original.vertex_count(), 4);
    assert_eq!(original.edge_count(), 8);
    assert_eq!(original.vertex_info(2).unwrap(), "Mall");
}

#[test]
fn json_batch() {
    let input = read_input(SAMPLE).expect("read sample");
    let all: Vec<_> = input
        .trips
        .iter()
        .map(|trip| plan_trip(&input.map, trip).expect("plan"))
        .collect();
    let json = render_json(&all).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[2]["end_name"], "School");
    assert_eq!(value[0]["metric"], "distance");
}
