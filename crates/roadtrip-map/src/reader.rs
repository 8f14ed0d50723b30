//! Line-oriented reader for road maps and trips.
//!
//! The input is three counted sections, in order:
//!
//! ```text
//! # locations: count, then "<id> <name>"
//! 2
//! 0 Anaheim
//! 1 Irvine
//! # road segments: count, then "<from> <to> <miles> <mph>"
//! 1
//! 0 1 12.5 65
//! # trips: count, then "<start> <end> <D|T>"
//! 1
//! 0 1 D
//! ```
//!
//! Blank lines and lines starting with `#` are skipped everywhere.

use std::str::FromStr;

use tracing::{debug, warn};

use roadtrip_graph::VertexId;

use crate::error::{MapError, Result};
use crate::road::{RoadMap, RoadSegment, Trip, TripMetric};

/// A parsed input file: the road map and the trips to plan on it.
#[derive(Debug, Clone)]
pub struct MapInput {
    pub map: RoadMap,
    pub trips: Vec<Trip>,
}

/// Yields the meaningful lines of an input text with their line numbers.
pub struct InputReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> InputReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    /// The next non-blank, non-comment line, trimmed, with its 1-based line
    /// number. `None` at end of input.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        for (index, raw) in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Some((index + 1, line));
        }
        None
    }

    /// Like [`next_line`](Self::next_line), but end of input is an error.
    pub fn expect_line(&mut self, expected: &'static str) -> Result<(usize, &'a str)> {
        self.next_line()
            .ok_or(MapError::UnexpectedEof { expected })
    }

    /// Read a line holding a single non-negative count.
    pub fn read_count(&mut self, expected: &'static str) -> Result<usize> {
        let (line, text) = self.expect_line(expected)?;
        parse_field(text, line, expected)
    }
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field.parse().map_err(|_| MapError::Parse {
        line,
        message: format!("invalid {what}: {field:?}"),
    })
}

fn split_fields<'a>(text: &'a str, line: usize, count: usize, shape: &str) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != count {
        return Err(MapError::Parse {
            line,
            message: format!("expected {shape}, found {text:?}"),
        });
    }
    Ok(fields)
}

fn parse_positive(field: &str, line: usize, what: &str, allow_zero: bool) -> Result<f64> {
    let value: f64 = parse_field(field, line, what)?;
    let in_range = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if !in_range {
        return Err(MapError::Parse {
            line,
            message: format!("{what} out of range: {value}"),
        });
    }
    Ok(value)
}

/// Read the location and road segment sections into a road map.
pub fn read_road_map(reader: &mut InputReader<'_>) -> Result<RoadMap> {
    let mut map = RoadMap::new();

    let vertex_count = reader.read_count("location count")?;
    for _ in 0..vertex_count {
        let (line, text) = reader.expect_line("location")?;
        let (id, name) = text
            .split_once(char::is_whitespace)
            .ok_or_else(|| MapError::Parse {
                line,
                message: format!("expected \"<id> <name>\", found {text:?}"),
            })?;
        let id: VertexId = parse_field(id, line, "location id")?;
        map.add_vertex(id, name.trim().to_string())
            .map_err(|source| MapError::Graph { line, source })?;
    }

    let edge_count = reader.read_count("road segment count")?;
    for _ in 0..edge_count {
        let (line, text) = reader.expect_line("road segment")?;
        let fields = split_fields(text, line, 4, "\"<from> <to> <miles> <mph>\"")?;
        let from: VertexId = parse_field(fields[0], line, "location id")?;
        let to: VertexId = parse_field(fields[1], line, "location id")?;
        let miles = parse_positive(fields[2], line, "miles", true)?;
        let mph = parse_positive(fields[3], line, "miles per hour", false)?;
        map.add_edge(from, to, RoadSegment::new(miles, mph))
            .map_err(|source| MapError::Graph { line, source })?;
    }

    debug!(
        locations = map.vertex_count(),
        segments = map.edge_count(),
        "read road map"
    );
    Ok(map)
}

/// Read the trip section. Trip endpoints must be locations on `map`.
pub fn read_trips(reader: &mut InputReader<'_>, map: &RoadMap) -> Result<Vec<Trip>> {
    let count = reader.read_count("trip count")?;
    // The count is untrusted; grow as lines actually arrive.
    let mut trips = Vec::new();
    for _ in 0..count {
        let (line, text) = reader.expect_line("trip")?;
        let fields = split_fields(text, line, 3, "\"<start> <end> <D|T>\"")?;
        let start: VertexId = parse_field(fields[0], line, "location id")?;
        let end: VertexId = parse_field(fields[1], line, "location id")?;
        let metric = TripMetric::from_code(fields[2]).ok_or_else(|| MapError::Parse {
            line,
            message: format!("invalid trip metric {:?} (expected D or T)", fields[2]),
        })?;
        for id in [start, end] {
            if !map.contains_vertex(id) {
                return Err(MapError::Parse {
                    line,
                    message: format!("unknown location {id}"),
                });
            }
        }
        trips.push(Trip { start, end, metric });
    }
    debug!(trips = trips.len(), "read trips");
    Ok(trips)
}

/// Read a complete input text: road map followed by trips.
pub fn read_input(text: &str) -> Result<MapInput> {
    let mut reader = InputReader::new(text);
    let map = read_road_map(&mut reader)?;
    let trips = read_trips(&mut reader, &map)?;
    if let Some((line, _)) = reader.next_line() {
        warn!(line, "ignoring input after the trip section");
    }
    Ok(MapInput { map, trips })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
# locations
3
0 Anaheim
1 Irvine Spectrum
2   Costa Mesa

# segments
3
0 1 12.5 65
1 2 6 45
2 0 10 55
# trips
2
0 2 D
2 1 T
";

    #[test]
    fn reads_small_input() {
        let input = read_input(SMALL).unwrap();
        assert_eq!(input.map.vertices(), vec![0, 1, 2]);
        assert_eq!(input.map.vertex_info(1).unwrap(), "Irvine Spectrum");
        assert_eq!(input.map.vertex_info(2).unwrap(), "Costa Mesa");
        assert_eq!(input.map.edge_count(), 3);
        assert_eq!(*input.map.edge_info(1, 2).unwrap(), RoadSegment::new(6.0, 45.0));
        assert_eq!(
            input.trips,
            vec![
                Trip { start: 0, end: 2, metric: TripMetric::Distance },
                Trip { start: 2, end: 1, metric: TripMetric::Time },
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let mut reader = InputReader::new("\n# c\n   \n  # indented\n 7 \n");
        assert_eq!(reader.next_line(), Some((5, "7")));
        assert_eq!(reader.next_line(), None);
    }

    #[test]
    fn bad_count_reports_line() {
        let err = read_input("# header\nthree\n").unwrap_err();
        match err {
            MapError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_name_rejected() {
        let err = read_input("1\n5\n").unwrap_err();
        assert!(matches!(err, MapError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn duplicate_location_rejected() {
        let err = read_input("2\n1 A\n1 B\n0\n0\n").unwrap_err();
        match err {
            MapError::Graph { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, roadtrip_graph::GraphError::DuplicateVertex(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn segment_to_unknown_location_rejected() {
        let err = read_input("1\n1 A\n1\n1 2 3 4\n0\n").unwrap_err();
        assert!(matches!(err, MapError::Graph { line: 4, .. }), "{err}");
    }

    #[test]
    fn duplicate_segment_rejected() {
        let err = read_input("2\n1 A\n2 B\n2\n1 2 3 4\n1 2 5 6\n0\n").unwrap_err();
        assert!(matches!(err, MapError::Graph { line: 6, .. }), "{err}");
    }

    #[test]
    fn segment_values_validated() {
        assert!(read_input("2\n1 A\n2 B\n1\n1 2 -3 40\n0\n").is_err());
        assert!(read_input("2\n1 A\n2 B\n1\n1 2 3 0\n0\n").is_err());
        assert!(read_input("2\n1 A\n2 B\n1\n1 2 3\n0\n").is_err());
        assert!(read_input("2\n1 A\n2 B\n1\n1 2 0 40\n0\n").is_ok());
    }

    #[test]
    fn trip_validation() {
        let base = "2\n1 A\n2 B\n1\n1 2 3 40\n";
        assert!(read_input(&format!("{base}1\n1 2 X\n")).is_err());
        assert!(read_input(&format!("{base}1\n1 9 D\n")).is_err());
        assert!(read_input(&format!("{base}1\n1 2 T\n")).is_ok());
    }

    #[test]
    fn truncated_input() {
        let err = read_input("2\n1 A\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { expected: "location" }));
        let err = read_input("1\n1 A\n0\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { expected: "trip count" }));
    }

    #[test]
    fn oversized_trip_count_is_an_error() {
        let err = read_input("1\n1 A\n0\n99999999999999999\n1 1 D\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { expected: "trip" }), "{err}");
    }

    #[test]
    fn oversized_location_and_segment_counts_are_errors() {
        let err = read_input("99999999999999999\n1 A\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { expected: "location" }), "{err}");
        let err = read_input("1\n1 A\n99999999999999999\n1 1 2 3\n").unwrap_err();
        assert!(matches!(err, MapError::UnexpectedEof { expected: "road segment" }), "{err}");
    }
}
