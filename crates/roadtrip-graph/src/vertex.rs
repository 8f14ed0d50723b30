//! Vertex records.
//!
//! A vertex owns its label and the ordered list of its outgoing edges.

use crate::edge::EdgeRecord;

/// Integer key identifying a vertex. Ids need not be contiguous or
/// zero-based.
pub type VertexId = i64;

/// A vertex in a [`Digraph`](crate::Digraph).
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V, E> {
    label: V,
    edges: Vec<EdgeRecord<E>>,
}

impl<V, E> Vertex<V, E> {
    /// Create a vertex with no outgoing edges.
    pub(crate) fn new(label: V) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    /// The vertex label.
    pub fn label(&self) -> &V {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut V {
        &mut self.label
    }

    pub(crate) fn into_label(self) -> V {
        self.label
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[EdgeRecord<E>] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut Vec<EdgeRecord<E>> {
        &mut self.edges
    }

    /// Position of the outgoing edge pointing at `to`, if any.
    pub(crate) fn position_of(&self, to: VertexId) -> Option<usize> {
        self.edges.iter().position(|e| e.target() == to)
    }
}
