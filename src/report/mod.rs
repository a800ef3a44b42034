//! Human-readable rendering of graphs and algorithm results.
//!
//! Pure formatting: every function takes a result value and returns a
//! `String`, leaving the caller to decide where it goes. [`render_graph`]
//! emits the same textual format [`parse_description`] reads, so a graph can
//! be printed and reloaded losslessly.
//!
//! [`parse_description`]: crate::loader::parse_description

use std::fmt::Write;

use crate::engine::graph::DiGraph;
use crate::engine::mst::MstOutcome;
use crate::engine::shortest_path::ShortestPaths;
use crate::engine::toposort::TopoSort;

/// Renders a graph in the loader's description format.
pub fn render_graph(graph: &DiGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", graph.vertex_count());
    for name in graph.vertex_names() {
        let _ = writeln!(out, "{name}");
    }
    let _ = writeln!(out, "{}", graph.edge_count());
    for (from, to, cost) in graph.edge_triples() {
        let _ = writeln!(out, "{from} {to} {cost}");
    }
    out
}

/// Renders a topological sort outcome as a single `-->` chain, or the
/// message that no ordering exists.
pub fn render_topo_sort(result: &TopoSort) -> String {
    let mut out = String::from("Topological Sort:\n");
    match result {
        TopoSort::Ordered(order) => {
            let chain: Vec<&str> = order.iter().map(AsRef::as_ref).collect();
            let _ = writeln!(out, "{}", chain.join(" --> "));
        }
        TopoSort::CycleDetected => {
            out.push_str("This graph cannot be topologically sorted.\n");
        }
    }
    out
}

/// Renders a shortest-path table, one line per vertex in index order.
pub fn render_shortest_paths(paths: &ShortestPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Shortest paths from {}:", paths.source());
    for report in paths.entries() {
        match report.distance {
            Some(distance) => {
                let chain: Vec<&str> = report.path.iter().map(AsRef::as_ref).collect();
                let _ = writeln!(
                    out,
                    "{}: cost {distance}, {}",
                    report.vertex,
                    chain.join(" --> ")
                );
            }
            None => {
                let _ = writeln!(out, "{}: no path", report.vertex);
            }
        }
    }
    out
}

/// Renders a spanning-tree outcome: accepted edges and total cost, or the
/// message that the graph is not connected.
pub fn render_mst(outcome: &MstOutcome) -> String {
    let mut out = String::from("Minimum Spanning Tree:\n");
    match outcome {
        MstOutcome::Tree { edges, total_cost } => {
            for edge in edges {
                let _ = writeln!(out, "{} -- {} ({})", edge.from, edge.to, edge.cost);
            }
            let _ = writeln!(out, "Total cost: {total_cost}");
        }
        MstOutcome::NotConnected => {
            out.push_str("This graph is not connected.\n");
        }
    }
    out
}
