//! Topological ordering via Kahn's algorithm.
//!
//! An in-degree table is derived from one scan over all edges, a FIFO queue
//! is seeded with every zero-in-degree vertex in ascending index order, and
//! vertices are drained one at a time, decrementing their successors. A cycle
//! is detected by arithmetic: if fewer vertices were emitted than the graph
//! holds, the vertices left behind all sit on (or behind) a cycle.
//!
//! The FIFO seeding order makes ties among simultaneously ready vertices
//! reproducible: the ordering is a pure function of the loaded graph.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::engine::graph::DiGraph;

/// The outcome of a topological sort.
///
/// A cyclic graph is a normal, expected outcome, not an error; no partial
/// ordering is ever reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopoSort {
    /// Every vertex, in an order where each edge's source precedes its
    /// destination.
    Ordered(Vec<Arc<str>>),
    /// The graph contains at least one cycle; no valid ordering exists.
    CycleDetected,
}

/// Computes a topological ordering of `graph`, or reports a cycle.
pub fn topo_sort(graph: &DiGraph) -> TopoSort {
    let mut in_degree = in_degree_table(graph);

    let mut ready: VecDeque<_> = graph
        .vertex_ids()
        .filter(|v| in_degree[v.index()] == 0)
        .collect();

    let mut ordering = Vec::with_capacity(graph.vertex_count());
    while let Some(v) = ready.pop_front() {
        ordering.push(Arc::clone(graph.name_of(v)));
        for edge in graph.edges_of(v) {
            let d = &mut in_degree[edge.to.index()];
            *d -= 1;
            if *d == 0 {
                ready.push_back(edge.to);
            }
        }
    }

    if ordering.len() == graph.vertex_count() {
        TopoSort::Ordered(ordering)
    } else {
        TopoSort::CycleDetected
    }
}

/// Counts, for every vertex, the edges terminating at it.
fn in_degree_table(graph: &DiGraph) -> Vec<usize> {
    let mut in_degree = vec![0usize; graph.vertex_count()];
    for v in graph.vertex_ids() {
        for edge in graph.edges_of(v) {
            in_degree[edge.to.index()] += 1;
        }
    }
    in_degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::graph::DiGraph;

    #[test]
    fn linear_chain_orders_in_dependency_order() {
        let g = DiGraph::build(["C", "A", "B"], [("A", "B", 1), ("B", "C", 1)]).unwrap();
        let TopoSort::Ordered(order) = topo_sort(&g) else {
            panic!("chain is acyclic");
        };
        let names: Vec<&str> = order.iter().map(AsRef::as_ref).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn ties_break_by_vertex_index_order() {
        // B and A are both ready immediately; B was loaded first.
        let g = DiGraph::build(["B", "A", "C"], [("B", "C", 1), ("A", "C", 1)]).unwrap();
        let TopoSort::Ordered(order) = topo_sort(&g) else {
            panic!("acyclic");
        };
        let names: Vec<&str> = order.iter().map(AsRef::as_ref).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = DiGraph::build(["A", "B"], [("A", "B", 1), ("B", "B", 1)]).unwrap();
        assert_eq!(topo_sort(&g), TopoSort::CycleDetected);
    }

    #[test]
    fn empty_graph_yields_empty_ordering() {
        let g = DiGraph::default();
        assert_eq!(topo_sort(&g), TopoSort::Ordered(Vec::new()));
    }
}
