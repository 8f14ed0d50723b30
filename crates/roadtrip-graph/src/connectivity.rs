//! Reachability and strong connectivity.
//!
//! Traversals use an explicit stack so that long chains cannot overflow the
//! call stack.

use std::collections::BTreeSet;

use crate::digraph::Digraph;
use crate::error::Result;
use crate::vertex::VertexId;

impl<V, E> Digraph<V, E> {
    /// The set of vertices reachable from `start` over outgoing edges,
    /// including `start` itself.
    pub fn reachable_from(&self, start: VertexId) -> Result<BTreeSet<VertexId>> {
        self.vertex(start)?;

        let mut visited = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            for edge in self.vertex(id)?.edges() {
                if !visited.contains(&edge.target()) {
                    stack.push(edge.target());
                }
            }
        }
        Ok(visited)
    }

    /// Returns true iff every vertex is reachable from every other vertex.
    ///
    /// Reachability is recomputed from each vertex in turn, so the cost is
    /// O(V * (V + E)). The empty graph and a lone vertex are both strongly
    /// connected.
    pub fn is_strongly_connected(&self) -> bool {
        let total = self.vertex_count();
        self.vertices().into_iter().all(|id| {
            self.reachable_from(id)
                .map(|reached| reached.len() == total)
                .unwrap_or(false)
        })
    }
}
