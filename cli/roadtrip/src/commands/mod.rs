//! CLI command implementations.

pub mod check;
pub mod directions;
pub mod route;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use roadtrip_map::{read_input, read_road_map, InputReader, MapInput, RoadMap};

/// Where input text came from, for error context.
struct Source {
    text: String,
    name: String,
}

/// Read a file, or standard input when `path` is `None` or `-`.
fn read_source(path: Option<&Path>) -> Result<Source> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            debug!(path = %path.display(), "read input file");
            Ok(Source {
                text,
                name: path.display().to_string(),
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading standard input")?;
            Ok(Source {
                text,
                name: "standard input".to_string(),
            })
        }
    }
}

/// Read and parse a full input (map and trips), or standard input when
/// `path` is `None` or `-`.
pub fn load_input(path: Option<&Path>) -> Result<MapInput> {
    let source = read_source(path)?;
    read_input(&source.text).with_context(|| format!("parsing {}", source.name))
}

/// Read and parse only the road map. Anything after the segment section,
/// including a malformed trip section, is ignored.
pub fn load_map(path: Option<&Path>) -> Result<RoadMap> {
    let source = read_source(path)?;
    let mut reader = InputReader::new(&source.text);
    read_road_map(&mut reader).with_context(|| format!("parsing {}", source.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "1\n7 Somewhere\n0\n1\n7 7 D\n").unwrap();

        let input = load_input(Some(&path)).unwrap();
        assert_eq!(input.map.vertex_count(), 1);
        assert_eq!(input.trips.len(), 1);
    }

    #[test]
    fn load_input_reports_path_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "1\n7 Somewhere\nzero\n").unwrap();

        let message = format!("{:#}", load_input(Some(&path)).unwrap_err());
        assert!(message.contains("broken.txt"), "{message}");
        assert!(message.contains("line 3"), "{message}");
    }

    #[test]
    fn load_map_ignores_trip_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "2\n1 A\n2 B\n1\n1 2 3 40\nnot a count\n1 9 Q\n").unwrap();

        assert!(load_input(Some(&path)).is_err());
        let map = load_map(Some(&path)).unwrap();
        assert_eq!(map.vertex_count(), 2);
        assert_eq!(map.edge_count(), 1);
    }

    #[test]
    fn load_map_still_checks_segments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "1\n1 A\n1\n1 2 3 40\n").unwrap();

        let message = format!("{:#}", load_map(Some(&path)).unwrap_err());
        assert!(message.contains("line 4"), "{message}");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_input(Some(&dir.path().join("absent.txt"))).is_err());
    }
}
