//! `roadtrip directions` — print directions for every trip in the input.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use roadtrip_map::{plan_trip, render_json, render_text, Directions, MapError, MapInput};

use crate::config::OutputFormat;

/// Printed instead of directions when the map is not strongly connected.
pub const DISCONNECTED_MAP: &str = "Disconnected Map";

/// The map must be strongly connected and is not.
#[derive(Debug, thiserror::Error)]
#[error("Disconnected Map: road map is not strongly connected (pass --allow-disconnected to plan anyway)")]
pub struct DisconnectedMap;

/// Print directions for the trips in `input`.
pub fn run(
    input: Option<&Path>,
    format: OutputFormat,
    precision: usize,
    require_strongly_connected: bool,
) -> Result<()> {
    let input = super::load_input(input)?;
    match report(&input, format, precision, require_strongly_connected) {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(e) => {
            if e.downcast_ref::<DisconnectedMap>().is_some() {
                println!("{DISCONNECTED_MAP}");
            }
            Err(e)
        }
    }
}

/// Check connectivity if required, then plan and render every trip.
pub fn report(
    input: &MapInput,
    format: OutputFormat,
    precision: usize,
    require_strongly_connected: bool,
) -> Result<String> {
    if require_strongly_connected && !input.map.is_strongly_connected() {
        return Err(DisconnectedMap.into());
    }

    let planned = plan_all(input)?;
    info!(trips = input.trips.len(), planned = planned.len(), "planned trips");
    render(&planned, format, precision)
}

/// Plan every trip, skipping those whose destination cannot be reached.
pub fn plan_all(input: &MapInput) -> Result<Vec<Directions>> {
    let mut planned = Vec::with_capacity(input.trips.len());
    for trip in &input.trips {
        match plan_trip(&input.map, trip) {
            Ok(directions) => planned.push(directions),
            Err(MapError::Unreachable { start, end }) => {
                warn!(start, end, "no route; skipping trip");
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("planning trip {} -> {}", trip.start, trip.end))
            }
        }
    }
    Ok(planned)
}

/// Render planned trips in the requested format.
pub fn render(planned: &[Directions], format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(planned
            .iter()
            .map(|d| render_text(d, precision))
            .collect()),
        OutputFormat::Json => {
            let mut json = render_json(planned).context("rendering JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
