//! Single-source shortest paths (Dijkstra's algorithm).
//!
//! Edge weights come from a caller-supplied function over edge labels, so a
//! single graph can answer different questions (shortest distance, shortest
//! time) by swapping the function. Weights must be non-negative.
//!
//! Each vertex moves monotonically from unvisited to the frontier (queued
//! in the heap) to finalized, and is finalized at most once. Unreached
//! vertices keep an unbounded distance, represented as `None` rather than a
//! large numeric sentinel.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::digraph::Digraph;
use crate::error::{GraphError, Result};
use crate::vertex::VertexId;

/// Heap entry: a tentative distance for a vertex.
///
/// Ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Result of a shortest-path search from one start vertex.
///
/// Holds an entry for every vertex that was in the graph when the search
/// ran. A vertex with no predecessor (the start itself, or a vertex that was
/// never reached) is its own predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    start: VertexId,
    predecessors: BTreeMap<VertexId, VertexId>,
    distances: BTreeMap<VertexId, Option<f64>>,
}

impl ShortestPaths {
    /// The vertex the search started from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Predecessor of `vertex` on its shortest path, or `None` if the vertex
    /// was not in the graph.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    /// Shortest-path weight from the start to `vertex`, or `None` if the
    /// vertex is unreachable or unknown.
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied().flatten()
    }

    /// Whether `vertex` can be reached from the start.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// The predecessor map, keyed by vertex id.
    pub fn predecessors(&self) -> &BTreeMap<VertexId, VertexId> {
        &self.predecessors
    }

    /// Consume the result, keeping only the predecessor map.
    pub fn into_predecessors(self) -> BTreeMap<VertexId, VertexId> {
        self.predecessors
    }

    /// The vertices on the shortest path from the start to `vertex`, both
    /// ends included, or `None` if `vertex` is unreachable.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.start {
            let prev = self.predecessor(current)?;
            // A vertex that is its own predecessor but not the start means
            // the map is not a tree rooted at the start.
            if prev == current || path.len() > self.predecessors.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<V, E> Digraph<V, E> {
    /// Run Dijkstra's algorithm from `start`, weighting each edge with
    /// `edge_weight(label)`.
    ///
    /// Fails if `start` is not a vertex of the graph. Among equal-weight
    /// paths the chosen predecessor is unspecified.
    pub fn shortest_paths<F>(&self, start: VertexId, edge_weight: F) -> Result<ShortestPaths>
    where
        F: Fn(&E) -> f64,
    {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(start));
        }

        let mut predecessors: BTreeMap<VertexId, VertexId> =
            self.vertices().into_iter().map(|id| (id, id)).collect();
        let mut distances: BTreeMap<VertexId, Option<f64>> =
            self.vertices().into_iter().map(|id| (id, None)).collect();
        let mut finalized: BTreeSet<VertexId> = BTreeSet::new();
        let mut frontier = BinaryHeap::new();

        distances.insert(start, Some(0.0));
        frontier.push(Frontier {
            distance: 0.0,
            vertex: start,
        });

        while let Some(Frontier { distance, vertex }) = frontier.pop() {
            // Stale entry left behind by a later, shorter relaxation.
            if !finalized.insert(vertex) {
                continue;
            }
            for edge in self.outgoing(vertex)? {
                let weight = edge_weight(edge.label());
                debug_assert!(
                    weight >= 0.0,
                    "edge {} -> {} has invalid weight {weight}",
                    edge.source(),
                    edge.target()
                );
                let candidate = distance + weight;
                let to = edge.target();
                let improves = match distances.get(&to).copied().flatten() {
                    Some(current) => candidate < current,
                    None => true,
                };
                if improves {
                    distances.insert(to, Some(candidate));
                    predecessors.insert(to, vertex);
                    frontier.push(Frontier {
                        distance: candidate,
                        vertex: to,
                    });
                }
            }
        }

        Ok(ShortestPaths {
            start,
            predecessors,
            distances,
        })
    }

    /// Run Dijkstra's algorithm from `start` and return only the predecessor
    /// map. Every vertex in the graph appears as a key.
    pub fn find_shortest_paths<F>(
        &self,
        start: VertexId,
        edge_weight: F,
    ) -> Result<BTreeMap<VertexId, VertexId>>
    where
        F: Fn(&E) -> f64,
    {
        Ok(self.shortest_paths(start, edge_weight)?.into_predecessors())
    }
}
