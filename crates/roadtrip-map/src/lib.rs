//! Road maps, trips and driving directions on top of [`roadtrip_graph`].
//!
//! A road map is a [`Digraph`](roadtrip_graph::Digraph) whose vertices are
//! named locations and whose edges are one-way road segments with a length
//! and a speed limit. Trips ask for the shortest-distance or shortest-time
//! route between two locations.

pub mod error;
pub mod plan;
pub mod reader;
pub mod render;
pub mod road;

pub use error::{MapError, Result};
pub use plan::{plan_trip, Directions, Leg};
pub use reader::{read_input, read_road_map, read_trips, InputReader, MapInput};
pub use render::{format_duration, render_json, render_text, DEFAULT_PRECISION, MAX_PRECISION};
pub use road::{RoadMap, RoadSegment, Trip, TripMetric};
