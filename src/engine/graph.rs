//! # Weighted directed graph
//!
//! This module implements the core graph representation shared by every
//! algorithm in the engine.
//!
//! ## Key components
//!
//! - **VertexId**: dense index newtype identifying a vertex within one loaded
//!   graph
//! - **Edge**: a directed, integer-weighted connection stored in the source
//!   vertex's adjacency list
//! - **DiGraph**: the adjacency representation plus the bidirectional
//!   name ↔ index table
//!
//! ## Design
//!
//! - Vertices are bulk-loaded: a graph is built once from a name table and an
//!   edge list, and never mutated afterwards. Every algorithm borrows the
//!   graph read-only.
//! - All edge endpoint names are resolved *before* the adjacency structure is
//!   populated, so a graph with a dangling edge index cannot be constructed.
//!   A failed build yields no graph at all; callers swap in the new value
//!   only on success, which makes reload atomic by construction.
//! - Parallel edges between the same ordered pair coexist as distinct
//!   entries, and self-loops are stored like any other edge.
//! - O(1) name lookups via an FxHashMap index over `Arc<str>` names; the
//!   `Arc` lets result values share the name storage without reallocating.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::engine::errors::GraphError;

/// A unique identifier for a vertex in a loaded graph.
///
/// VertexId is a dense index in `[0, vertex_count)`, assigned in vertex-table
/// order at load time and stable for the lifetime of the graph. Implements
/// Ord/PartialOrd for deterministic iteration and tie-breaking.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the id as a `usize` for indexing dense per-vertex tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed, weighted edge stored in its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// The destination vertex.
    pub to: VertexId,
    /// The edge cost. Any `i64` is representable; the shortest-path solver is
    /// only correct for non-negative costs (see [`shortest_paths`]).
    ///
    /// [`shortest_paths`]: crate::engine::shortest_path::shortest_paths
    pub cost: i64,
}

/// A weighted directed graph over named vertices.
///
/// Owns the adjacency representation (one outgoing edge list per vertex) and
/// the index ↔ name table. Built once via [`DiGraph::build`]; read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// Vertex names in index order.
    names: Vec<Arc<str>>,
    /// Reverse lookup from name to dense index.
    name_index: FxHashMap<Arc<str>, VertexId>,
    /// Outgoing edges per vertex, in load order.
    adjacency: Vec<SmallVec<[Edge; 4]>>,
}

impl DiGraph {
    /// Builds a graph from a vertex name table and an edge triple list.
    ///
    /// Names must be unique, non-empty, and whitespace-free (the textual
    /// description format tokenizes on whitespace, and every buildable graph
    /// round-trips through it). Edges reference vertices by name and are
    /// resolved here; every endpoint is resolved before any edge is stored,
    /// so either the whole load succeeds or no graph is produced.
    ///
    /// # Errors
    ///
    /// * [`GraphError::InvalidVertexName`] if a name is empty or contains
    ///   whitespace
    /// * [`GraphError::DuplicateVertex`] if a name appears twice in `names`
    /// * [`GraphError::UnknownVertex`] if an edge endpoint is not in `names`
    pub fn build<N, E, S, F, T>(names: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
        E: IntoIterator<Item = (F, T, i64)>,
        F: AsRef<str>,
        T: AsRef<str>,
    {
        let names: Vec<Arc<str>> = names.into_iter().map(Into::into).collect();

        let mut name_index =
            FxHashMap::with_capacity_and_hasher(names.len(), Default::default());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(GraphError::InvalidVertexName {
                    name: name.to_string(),
                });
            }
            let id = VertexId(i as u32);
            if name_index.insert(Arc::clone(name), id).is_some() {
                return Err(GraphError::DuplicateVertex {
                    name: name.to_string(),
                });
            }
        }

        // Resolve every endpoint first; only a fully resolved edge list may
        // touch the adjacency structure.
        let mut resolved: Vec<(VertexId, Edge)> = Vec::new();
        for (from, to, cost) in edges {
            let from_id = Self::resolve_in(&name_index, from.as_ref())?;
            let to_id = Self::resolve_in(&name_index, to.as_ref())?;
            resolved.push((from_id, Edge { to: to_id, cost }));
        }

        let mut adjacency: Vec<SmallVec<[Edge; 4]>> = vec![SmallVec::new(); names.len()];
        for (from, edge) in resolved {
            adjacency[from.index()].push(edge);
        }

        Ok(Self {
            names,
            name_index,
            adjacency,
        })
    }

    fn resolve_in(
        name_index: &FxHashMap<Arc<str>, VertexId>,
        name: &str,
    ) -> Result<VertexId, GraphError> {
        name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                name: name.to_string(),
            })
    }

    /// Resolves a vertex name to its dense index.
    ///
    /// Returns `None` when the name is absent; callers rely on the tagged
    /// absence to detect malformed input rather than a sentinel index.
    pub fn resolve(&self, name: &str) -> Option<VertexId> {
        self.name_index.get(name).copied()
    }

    /// Returns the name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid index for this graph. Valid ids only
    /// originate from [`resolve`](Self::resolve) or the graph's own edges, so
    /// this is a caller logic error.
    pub fn name_of(&self, id: VertexId) -> &Arc<str> {
        &self.names[id.index()]
    }

    /// Returns the outgoing edges of a vertex, in load order.
    pub fn edges_of(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|out| out.len()).sum()
    }

    /// Returns the vertex names in index order.
    pub fn vertex_names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Iterates over every vertex id in ascending index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.names.len() as u32).map(VertexId)
    }

    /// Iterates over all edges as `(from, to, cost)` name triples, in vertex
    /// index order and load order within a vertex.
    ///
    /// Re-deriving the edge set through this iterator reproduces the loaded
    /// triple multiset exactly, with no duplication or loss.
    pub fn edge_triples(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<str>, i64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, out)| {
            let from = &self.names[i];
            out.iter()
                .map(move |edge| (from, &self.names[edge.to.index()], edge.cost))
        })
    }
}
