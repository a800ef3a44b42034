//! # Graphway - weighted directed graph engine
//!
//! Graphway loads a weighted directed graph from a simple textual description
//! and runs three classical algorithms over it: topological ordering,
//! single-source shortest paths, and minimum spanning tree construction.
//!
//! ## Architecture
//!
//! - **engine**: The graph representation and the three algorithms
//! - **loader**: Textual description parsing
//! - **report**: Human-readable rendering of results
//!
//! The graph is bulk-loaded once and is read-only thereafter; each algorithm
//! borrows it immutably and returns a fresh result value. Structural
//! outcomes (a cyclic graph, a disconnected graph, an unreachable vertex)
//! are tagged results, not errors.
//!
//! ## Usage
//!
//! ```rust
//! use graphway::{load_graph, topo_sort, shortest_paths, TopoSort};
//!
//! let graph = load_graph("3\nA B C\n2\nA B 2\nB C 6\n").expect("valid description");
//!
//! let TopoSort::Ordered(order) = topo_sort(&graph) else {
//!     panic!("this graph is acyclic");
//! };
//! assert_eq!(order.len(), 3);
//!
//! let paths = shortest_paths(&graph, "A").expect("A is a vertex");
//! assert_eq!(paths.get("C").unwrap().distance, Some(8));
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod loader;
pub mod report;

// Re-export commonly used types
pub use engine::errors::GraphError;
pub use engine::graph::{DiGraph, Edge, VertexId};
pub use engine::mst::{minimum_spanning_tree, MstOutcome, TreeEdge};
pub use engine::shortest_path::{shortest_paths, PathReport, ShortestPaths};
pub use engine::toposort::{topo_sort, TopoSort};

/// Parses a textual graph description into a [`DiGraph`].
///
/// This is the convenience entry point wrapping
/// [`loader::parse_description`]. The description supplies a vertex count,
/// that many distinct names, an edge count, and that many
/// `from to cost` triples, whitespace-separated.
pub fn load_graph(source: &str) -> Result<DiGraph, GraphError> {
    loader::parse_description(source)
}
