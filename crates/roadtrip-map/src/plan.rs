//! Trip planning: turn a shortest-path predecessor map into directions.

use serde::Serialize;
use tracing::debug;

use roadtrip_graph::VertexId;

use crate::error::{MapError, Result};
use crate::road::{RoadMap, Trip, TripMetric};

/// One step of a route: drive to `to` along a single road segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: VertexId,
    pub to: VertexId,
    /// Name of the destination location.
    pub name: String,
    pub miles: f64,
    pub miles_per_hour: f64,
    pub hours: f64,
}

/// Directions for a single trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directions {
    pub metric: TripMetric,
    pub start: VertexId,
    pub start_name: String,
    pub end: VertexId,
    pub end_name: String,
    pub legs: Vec<Leg>,
    pub total_miles: f64,
    pub total_hours: f64,
}

/// Plan `trip` on `map`, minimizing the trip's metric.
pub fn plan_trip(map: &RoadMap, trip: &Trip) -> Result<Directions> {
    for id in [trip.start, trip.end] {
        if !map.contains_vertex(id) {
            return Err(MapError::UnknownVertex(id));
        }
    }

    let metric = trip.metric;
    let predecessors = map.find_shortest_paths(trip.start, |segment| metric.weight(segment))?;

    // Walk backward from the destination; the start is the only reached
    // vertex that is its own predecessor.
    let mut stops = vec![trip.end];
    let mut current = trip.end;
    while current != trip.start {
        let prev = predecessors
            .get(&current)
            .copied()
            .ok_or(MapError::UnknownVertex(current))?;
        if prev == current || stops.len() > predecessors.len() {
            return Err(MapError::Unreachable {
                start: trip.start,
                end: trip.end,
            });
        }
        stops.push(prev);
        current = prev;
    }
    stops.reverse();

    let mut legs = Vec::with_capacity(stops.len().saturating_sub(1));
    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let segment = map.edge_info(from, to)?;
        legs.push(Leg {
            from,
            to,
            name: map.vertex_info(to)?.clone(),
            miles: segment.miles,
            miles_per_hour: segment.miles_per_hour,
            hours: segment.travel_hours(),
        });
    }

    let directions = Directions {
        metric,
        start: trip.start,
        start_name: map.vertex_info(trip.start)?.clone(),
        end: trip.end,
        end_name: map.vertex_info(trip.end)?.clone(),
        total_miles: legs.iter().map(|l| l.miles).sum(),
        total_hours: legs.iter().map(|l| l.hours).sum(),
        legs,
    };
    debug!(
        start = trip.start,
        end = trip.end,
        metric = metric.noun(),
        legs = directions.legs.len(),
        "planned trip"
    );
    Ok(directions)
}
