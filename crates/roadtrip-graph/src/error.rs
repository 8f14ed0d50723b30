//! Error types for graph operations.

use crate::vertex::VertexId;

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced vertex or edge does not exist.
    NotFound,
    /// The vertex id or edge pair is already present.
    Duplicate,
    /// An edge operation names an endpoint that is not in the graph.
    InvalidReference,
}

/// Errors that can occur during graph mutation or lookup.
///
/// Every failing operation leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("duplicate vertex id: {0}")]
    DuplicateVertex(VertexId),

    #[error("duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: VertexId, to: VertexId },

    #[error("dangling edge: vertex {from} or vertex {to} not in graph")]
    DanglingEdge { from: VertexId, to: VertexId },
}

impl GraphError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. } => ErrorKind::NotFound,
            GraphError::DuplicateVertex(_) | GraphError::DuplicateEdge { .. } => {
                ErrorKind::Duplicate
            }
            GraphError::DanglingEdge { .. } => ErrorKind::InvalidReference,
        }
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
