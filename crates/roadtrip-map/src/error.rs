//! Error types for reading road maps and planning trips.

use roadtrip_graph::{GraphError, VertexId};

/// Errors that can occur while reading input or planning a trip.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Description of what was expected.
        message: String,
    },

    /// The input ended before a required line.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// Description of the missing line.
        expected: &'static str,
    },

    /// A well-formed line was rejected by the graph.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number in the input.
        line: usize,
        #[source]
        source: GraphError,
    },

    /// A trip or route names a location that is not on the map.
    #[error("unknown location: {0}")]
    UnknownVertex(VertexId),

    /// The destination cannot be reached from the start.
    #[error("no route from {start} to {end}")]
    Unreachable {
        /// Start location.
        start: VertexId,
        /// Destination.
        end: VertexId,
    },

    /// A graph lookup failed while walking a planned route.
    #[error(transparent)]
    Lookup(#[from] GraphError),

    /// JSON rendering failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for road map operations.
pub type Result<T> = std::result::Result<T, MapError>;
