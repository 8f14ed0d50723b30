//! Generic directed graph with adjacency-list storage.
//!
//! A [`Digraph`] maps integer vertex ids to a caller-defined vertex label and
//! an ordered list of outgoing edges, each carrying a caller-defined edge
//! label. At most one edge exists per ordered `(from, to)` pair.
//!
//! Besides mutation and structural queries the graph answers two questions:
//! whether it is strongly connected, and what the shortest-weight paths from
//! a start vertex are under a caller-supplied edge-weight function
//! (Dijkstra's algorithm).
//!
//! ```
//! use roadtrip_graph::Digraph;
//!
//! let mut g: Digraph<&str, f64> = Digraph::new();
//! g.add_vertex(1, "a").unwrap();
//! g.add_vertex(2, "b").unwrap();
//! g.add_vertex(3, "c").unwrap();
//! g.add_edge(1, 2, 5.0).unwrap();
//! g.add_edge(2, 3, 2.0).unwrap();
//! g.add_edge(1, 3, 100.0).unwrap();
//!
//! let preds = g.find_shortest_paths(1, |w| *w).unwrap();
//! assert_eq!(preds[&3], 2);
//! ```

pub mod connectivity;
pub mod digraph;
pub mod edge;
pub mod error;
pub mod shortest_path;
pub mod vertex;

pub use digraph::Digraph;
pub use edge::EdgeRecord;
pub use error::{ErrorKind, GraphError, Result};
pub use shortest_path::ShortestPaths;
pub use vertex::{Vertex, VertexId};
