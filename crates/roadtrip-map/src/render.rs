//! Console and JSON rendering of directions.

use std::fmt;

use crate::error::Result;
use crate::plan::Directions;
use crate::road::TripMetric;

/// Render a duration given in hours as `"H hours M mins S secs"`.
///
/// Leading zero units are dropped, so a short leg reads `"M mins S secs"`
/// or just `"S secs"`. Seconds are shown with `precision` decimals and the
/// whole value is rounded at that precision before it is split into units.
/// Precision above [`MAX_PRECISION`] is clamped.
pub fn format_duration(hours: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let scale = 10f64.powi(precision as i32);
    let total = (hours * 3600.0 * scale).round() / scale;
    let hrs = (total / 3600.0).floor();
    let mins = ((total - hrs * 3600.0) / 60.0).floor();
    let secs = (total - hrs * 3600.0 - mins * 60.0).max(0.0);

    if hrs > 0.0 {
        format!("{hrs} hours {mins} mins {secs:.precision$} secs")
    } else if mins > 0.0 {
        format!("{mins} mins {secs:.precision$} secs")
    } else {
        format!("{secs:.precision$} secs")
    }
}

/// Default number of decimals for miles, speeds and seconds.
pub const DEFAULT_PRECISION: usize = 1;

/// Largest precision honored. Beyond this an `f64` has no digits left to show
/// and the rounding scale overflows.
pub const MAX_PRECISION: usize = 12;

/// Console layout. The formatter precision (`{:.2}`) controls decimals and
/// defaults to [`DEFAULT_PRECISION`].
impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION).min(MAX_PRECISION);

        writeln!(
            f,
            "Shortest {} from {} to {}",
            self.metric.noun(),
            self.start_name,
            self.end_name
        )?;
        writeln!(f, "  Begin at {}", self.start_name)?;

        for leg in &self.legs {
            match self.metric {
                TripMetric::Distance => {
                    writeln!(f, "  Continue to {} ({:.p$} miles)", leg.name, leg.miles)?;
                }
                TripMetric::Time => writeln!(
                    f,
                    "  Continue to {} ({:.p$} miles @ {:.p$}mph = {})",
                    leg.name,
                    leg.miles,
                    leg.miles_per_hour,
                    format_duration(leg.hours, p)
                )?,
            }
        }

        match self.metric {
            TripMetric::Distance => {
                writeln!(f, "Total distance: {:.p$} miles", self.total_miles)?;
            }
            TripMetric::Time => {
                writeln!(f, "Total time: {}", format_duration(self.total_hours, p))?;
            }
        }
        writeln!(f)
    }
}

/// Render directions as console text, ending with a blank line.
///
/// ```text
/// Shortest distance from Home to Beach
///   Begin at Home
///   Continue to Town (5.0 miles)
///   Continue to Beach (2.0 miles)
/// Total distance: 7.0 miles
/// ```
pub fn render_text(directions: &Directions, precision: usize) -> String {
    format!("{directions:.precision$}")
}

/// Render a batch of directions as a pretty-printed JSON array.
pub fn render_json(directions: &[Directions]) -> Result<String> {
    Ok(serde_json::to_string_pretty(directions)?)
}
