//! `roadtrip check` — summarize a road map without planning trips.

use std::path::Path;

use anyhow::Result;

use roadtrip_map::MapInput;

/// Print counts and connectivity for the input map.
pub fn run(input: Option<&Path>) -> Result<()> {
    let input = super::load_input(input)?;
    print!("{}", summary(&input));
    Ok(())
}

/// Human-readable summary of a parsed input.
pub fn summary(input: &MapInput) -> String {
    let connected = if input.map.is_strongly_connected() {
        "yes"
    } else {
        "no"
    };
    format!(
        "Locations:          {}\n\
         Road segments:      {}\n\
         Trips:              {}\n\
         Strongly connected: {connected}\n",
        input.map.vertex_count(),
        input.map.edge_count(),
        input.trips.len()
    )
}
