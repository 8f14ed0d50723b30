//! Edge records stored in a vertex's outgoing list.

use crate::vertex::VertexId;

/// A directed edge `from -> to` carrying a caller-defined label.
///
/// Owned by the vertex record of its `from` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<E> {
    from: VertexId,
    to: VertexId,
    label: E,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(from: VertexId, to: VertexId, label: E) -> Self {
        Self { from, to, label }
    }

    /// Source vertex.
    pub fn source(&self) -> VertexId {
        self.from
    }

    /// Destination vertex.
    pub fn target(&self) -> VertexId {
        self.to
    }

    /// The `(from, to)` pair.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// The edge label.
    pub fn label(&self) -> &E {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut E {
        &mut self.label
    }

    pub(crate) fn into_label(self) -> E {
        self.label
    }
}
