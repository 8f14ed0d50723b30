//! The graph container: vertex and edge mutation plus structural queries.
//!
//! Vertices live in an ordered map keyed by [`VertexId`], so every listing
//! comes back in ascending id order. Each vertex keeps its outgoing edges in
//! insertion order.

use std::collections::BTreeMap;

use crate::edge::EdgeRecord;
use crate::error::{GraphError, Result};
use crate::vertex::{Vertex, VertexId};

/// A directed graph over vertex labels `V` and edge labels `E`.
///
/// `Clone` produces a fully independent deep copy. Moving the graph moves
/// the single map that owns every record; `std::mem::take` leaves an empty
/// graph behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph<V, E> {
    vertices: BTreeMap<VertexId, Vertex<V, E>>,
}

impl<V, E> Digraph<V, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Insert a vertex with no outgoing edges.
    pub fn add_vertex(&mut self, id: VertexId, label: V) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.insert(id, Vertex::new(label));
        Ok(())
    }

    /// Append an edge `from -> to` to `from`'s outgoing list.
    ///
    /// Both endpoints must exist and the pair must not already be connected
    /// in this direction. Self-loops are accepted.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: E) -> Result<()> {
        self.check_endpoints(from, to)?;
        let vertex = self.vertex_mut(from)?;
        if vertex.position_of(to).is_some() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        vertex.edges_mut().push(EdgeRecord::new(from, to, label));
        Ok(())
    }

    /// Remove a vertex, its outgoing edges and every edge pointing at it.
    ///
    /// Returns the removed vertex label.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<V> {
        let removed = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        for vertex in self.vertices.values_mut() {
            vertex.edges_mut().retain(|e| e.target() != id);
        }
        Ok(removed.into_label())
    }

    /// Remove the edge `from -> to`, returning its label.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<E> {
        self.check_endpoints(from, to)?;
        let vertex = self.vertex_mut(from)?;
        let index = vertex
            .position_of(to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        Ok(vertex.edges_mut().remove(index).into_label())
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// Every `(from, to)` pair in the graph, grouped by source vertex in
    /// ascending id order, each group in insertion order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.vertices
            .values()
            .flat_map(|v| v.edges().iter().map(EdgeRecord::endpoints))
            .collect()
    }

    /// The `(from, to)` pairs of edges leaving `vertex`, in insertion order.
    pub fn edges_from(&self, vertex: VertexId) -> Result<Vec<(VertexId, VertexId)>> {
        Ok(self
            .outgoing(vertex)?
            .iter()
            .map(EdgeRecord::endpoints)
            .collect())
    }

    /// Borrow the outgoing edge records of `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> Result<&[EdgeRecord<E>]> {
        Ok(self.vertex(vertex)?.edges())
    }

    /// Look up a vertex label.
    pub fn vertex_info(&self, id: VertexId) -> Result<&V> {
        Ok(self.vertex(id)?.label())
    }

    /// Look up a vertex label (mutable).
    pub fn vertex_info_mut(&mut self, id: VertexId) -> Result<&mut V> {
        Ok(self.vertex_mut(id)?.label_mut())
    }

    /// Look up the label of the edge `from -> to`.
    pub fn edge_info(&self, from: VertexId, to: VertexId) -> Result<&E> {
        self.check_endpoints(from, to)?;
        self.vertex(from)?
            .edges()
            .iter()
            .find(|e| e.target() == to)
            .map(EdgeRecord::label)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Look up the label of the edge `from -> to` (mutable).
    pub fn edge_info_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut E> {
        self.check_endpoints(from, to)?;
        self.vertex_mut(from)?
            .edges_mut()
            .iter_mut()
            .find(|e| e.target() == to)
            .map(EdgeRecord::label_mut)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Whether `id` is a vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Whether the edge `from -> to` exists.
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|v| v.position_of(to).is_some())
    }

    /// Return the total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Return the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges().len()).sum()
    }

    /// Return the number of edges leaving `vertex`.
    pub fn edge_count_from(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.vertex(vertex)?.edges().len())
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over `(id, vertex)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex<V, E>)> {
        self.vertices.iter().map(|(id, v)| (*id, v))
    }

    /// Check the structural invariants: every edge is stored under its
    /// source vertex, points at an existing vertex, and no vertex has two
    /// edges to the same destination.
    pub fn validate(&self) -> std::result::Result<(), Vec<GraphError>> {
        let mut errors = Vec::new();

        for (&id, vertex) in &self.vertices {
            for (i, edge) in vertex.edges().iter().enumerate() {
                let (from, to) = edge.endpoints();
                if from != id || !self.vertices.contains_key(&to) {
                    errors.push(GraphError::DanglingEdge { from, to });
                }
                if vertex.edges()[..i].iter().any(|e| e.target() == to) {
                    errors.push(GraphError::DuplicateEdge { from, to });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn vertex(&self, id: VertexId) -> Result<&Vertex<V, E>> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<V, E>> {
        self.vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Edge operations report a missing endpoint as a dangling reference.
    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<()> {
        if self.vertices.contains_key(&from) && self.vertices.contains_key(&to) {
            Ok(())
        } else {
            Err(GraphError::DanglingEdge { from, to })
        }
    }
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
