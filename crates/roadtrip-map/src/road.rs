//! Road segments, trip requests and the road map type.

use serde::Serialize;

use roadtrip_graph::{Digraph, VertexId};

/// A one-way stretch of road between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadSegment {
    /// Length in miles.
    pub miles: f64,
    /// Speed limit in miles per hour.
    pub miles_per_hour: f64,
}

impl RoadSegment {
    pub fn new(miles: f64, miles_per_hour: f64) -> Self {
        Self {
            miles,
            miles_per_hour,
        }
    }

    /// Time to drive the segment at its speed limit, in hours.
    pub fn travel_hours(&self) -> f64 {
        self.miles / self.miles_per_hour
    }
}

/// A road map: named locations connected by road segments.
pub type RoadMap = Digraph<String, RoadSegment>;

/// What a trip should minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripMetric {
    /// Total miles driven.
    Distance,
    /// Total driving time.
    Time,
}

impl TripMetric {
    /// Edge weight for this metric: miles for distance, hours for time.
    pub fn weight(self, segment: &RoadSegment) -> f64 {
        match self {
            TripMetric::Distance => segment.miles,
            TripMetric::Time => segment.travel_hours(),
        }
    }

    /// Parse the single-letter code used in trip lines (`D` or `T`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" | "d" => Some(TripMetric::Distance),
            "T" | "t" => Some(TripMetric::Time),
            _ => None,
        }
    }

    /// Word used in direction headings.
    pub fn noun(self) -> &'static str {
        match self {
            TripMetric::Distance => "distance",
            TripMetric::Time => "time",
        }
    }
}

/// A request for directions between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub start: VertexId,
    pub end: VertexId,
    pub metric: TripMetric,
}
