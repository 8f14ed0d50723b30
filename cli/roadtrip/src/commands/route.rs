//! `roadtrip route` — plan a single trip given on the command line.

use std::path::Path;

use anyhow::{Context, Result};

use roadtrip_graph::VertexId;
use roadtrip_map::{plan_trip, RoadMap, Trip, TripMetric};

use super::directions::render;
use crate::config::OutputFormat;

/// Plan one trip on the input map. Only the location and segment sections
/// are read; the input's own trips are never parsed.
pub fn run(
    input: Option<&Path>,
    start: VertexId,
    end: VertexId,
    metric: TripMetric,
    format: OutputFormat,
    precision: usize,
) -> Result<()> {
    let map = super::load_map(input)?;
    print!("{}", report(&map, Trip { start, end, metric }, format, precision)?);
    Ok(())
}

/// Plan `trip` on `map` and render the directions.
pub fn report(map: &RoadMap, trip: Trip, format: OutputFormat, precision: usize) -> Result<String> {
    let directions = plan_trip(map, &trip)
        .with_context(|| format!("planning trip {} -> {}", trip.start, trip.end))?;
    render(&[directions], format, precision)
}
