//! Minimum spanning tree via Kruskal's algorithm.
//!
//! The adjacency structure is flattened into one candidate list of all
//! directed edges, sorted ascending by `(cost, from, to)` so the accepted
//! edge set is reproducible. Edges are taken cheapest first; an edge whose
//! endpoints already share a disjoint-set component would close a cycle and
//! is discarded, any other edge is accepted and its components merged. The
//! scan stops as soon as a single component remains.
//!
//! Connectivity is judged on the underlying undirected structure: when the
//! graph encodes a connection in both directions, both directed edges are
//! candidates, and whichever sorts first wins the union while the other is
//! rejected as redundant.

use std::sync::Arc;

use crate::engine::disjoint_set::DisjointSet;
use crate::engine::graph::{DiGraph, VertexId};

/// An accepted spanning tree edge, reported by endpoint names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge {
    /// The edge's source vertex name.
    pub from: Arc<str>,
    /// The edge's destination vertex name.
    pub to: Arc<str>,
    /// The edge cost.
    pub cost: i64,
}

/// The outcome of spanning-tree construction.
///
/// A disconnected graph is a normal, expected outcome, not an error; no
/// partial forest is ever reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MstOutcome {
    /// A spanning tree: `vertex_count - 1` accepted edges and their cost sum.
    Tree {
        /// The accepted edges, in acceptance (ascending cost) order.
        edges: Vec<TreeEdge>,
        /// The sum of the accepted edges' costs.
        total_cost: i64,
    },
    /// The vertex set is empty, or the candidate edges were exhausted before
    /// the components collapsed to one.
    NotConnected,
}

/// Builds a minimum spanning tree of `graph`, treated as undirected.
pub fn minimum_spanning_tree(graph: &DiGraph) -> MstOutcome {
    if graph.vertex_count() == 0 {
        return MstOutcome::NotConnected;
    }

    let mut candidates: Vec<(i64, VertexId, VertexId)> = graph
        .vertex_ids()
        .flat_map(|from| {
            graph
                .edges_of(from)
                .iter()
                .map(move |edge| (edge.cost, from, edge.to))
        })
        .collect();
    candidates.sort_unstable();

    let mut forest = DisjointSet::new(graph.vertex_count());
    let mut edges = Vec::with_capacity(graph.vertex_count() - 1);
    let mut total_cost = 0i64;

    if forest.components() == 1 {
        // Single vertex: the trivial tree with no edges.
        return MstOutcome::Tree { edges, total_cost };
    }

    for (cost, from, to) in candidates {
        if forest.find(from) == forest.find(to) {
            continue;
        }
        let complete = forest.union(from, to);
        edges.push(TreeEdge {
            from: Arc::clone(graph.name_of(from)),
            to: Arc::clone(graph.name_of(to)),
            cost,
        });
        total_cost += cost;
        if complete {
            return MstOutcome::Tree { edges, total_cost };
        }
    }

    MstOutcome::NotConnected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::graph::DiGraph;

    #[test]
    fn triangle_keeps_the_two_cheap_edges() {
        let g = DiGraph::build(
            ["X", "Y", "Z"],
            [
                ("X", "Y", 1),
                ("Y", "X", 1),
                ("Y", "Z", 2),
                ("Z", "Y", 2),
                ("X", "Z", 10),
                ("Z", "X", 10),
            ],
        )
        .unwrap();
        let MstOutcome::Tree { edges, total_cost } = minimum_spanning_tree(&g) else {
            panic!("triangle is connected");
        };
        assert_eq!(total_cost, 3);
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.cost < 10));
    }

    #[test]
    fn disconnected_graph_is_reported() {
        let g = DiGraph::build(["A", "B", "C"], [("A", "B", 1)]).unwrap();
        assert_eq!(minimum_spanning_tree(&g), MstOutcome::NotConnected);
    }

    #[test]
    fn single_vertex_is_a_trivial_tree() {
        let g = DiGraph::build(["A"], Vec::<(String, String, i64)>::new()).unwrap();
        assert_eq!(
            minimum_spanning_tree(&g),
            MstOutcome::Tree {
                edges: Vec::new(),
                total_cost: 0
            }
        );
    }

    #[test]
    fn empty_graph_is_not_connected() {
        let g = DiGraph::default();
        assert_eq!(minimum_spanning_tree(&g), MstOutcome::NotConnected);
    }

    #[test]
    fn one_directed_edge_per_connection_suffices() {
        // Connectivity is undirected; direction of the stored edge is moot.
        let g = DiGraph::build(["A", "B", "C"], [("B", "A", 4), ("C", "B", 2)]).unwrap();
        let MstOutcome::Tree { edges, total_cost } = minimum_spanning_tree(&g) else {
            panic!("connected");
        };
        assert_eq!(edges.len(), 2);
        assert_eq!(total_cost, 6);
    }
}
