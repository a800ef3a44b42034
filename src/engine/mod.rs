//! The graph algorithms engine.
//!
//! This module provides:
//! - **errors**: Error types for loading and lookup failures
//! - **graph**: The weighted directed graph representation and name table
//! - **disjoint_set**: Union-find forest used by spanning-tree construction
//! - **toposort**: Topological ordering (Kahn's algorithm)
//! - **shortest_path**: Single-source shortest paths (lazy-deletion Dijkstra)
//! - **mst**: Minimum spanning tree (Kruskal's algorithm)

pub mod disjoint_set;
pub mod errors;
pub mod graph;
pub mod mst;
pub mod shortest_path;
pub mod toposort;
