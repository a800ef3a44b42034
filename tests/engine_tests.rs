//! Integration tests for the engine's public surface.

use graphway::{
    load_graph, minimum_spanning_tree, report, shortest_paths, topo_sort, GraphError, MstOutcome,
    TopoSort,
};

/// A, B, C, D with a cycle A -> B -> C -> D -> A plus a chord D -> B.
const CYCLIC_SAMPLE: &str = "4\nA B C D\n5\nA B 2\nB C 6\nC D 5\nD A 7\nD B 4\n";

/// X, Y, Z triangle with both directions of every connection encoded.
const TRIANGLE_SAMPLE: &str = "3\nX Y Z\n6\nX Y 1\nY X 1\nY Z 2\nZ Y 2\nX Z 10\nZ X 10\n";

#[test]
fn cyclic_sample_has_no_topological_order() {
    let graph = load_graph(CYCLIC_SAMPLE).unwrap();
    assert_eq!(topo_sort(&graph), TopoSort::CycleDetected);
}

#[test]
fn cyclic_sample_shortest_paths_from_a() {
    let graph = load_graph(CYCLIC_SAMPLE).unwrap();
    let paths = shortest_paths(&graph, "A").unwrap();

    assert_eq!(paths.get("A").unwrap().distance, Some(0));
    assert_eq!(paths.get("B").unwrap().distance, Some(2));
    assert_eq!(paths.get("C").unwrap().distance, Some(8));
    assert_eq!(paths.get("D").unwrap().distance, Some(13));

    let d = paths.get("D").unwrap();
    let path: Vec<&str> = d.path.iter().map(AsRef::as_ref).collect();
    assert_eq!(path, ["A", "B", "C", "D"]);
}

#[test]
fn triangle_minimum_spanning_tree_rejects_the_expensive_edge() {
    let graph = load_graph(TRIANGLE_SAMPLE).unwrap();
    let MstOutcome::Tree { edges, total_cost } = minimum_spanning_tree(&graph) else {
        panic!("triangle is connected");
    };
    assert_eq!(total_cost, 3);
    assert_eq!(edges.len(), 2);

    // Directionless pairing: the accepted edges connect {X,Y} and {Y,Z}.
    let mut pairs: Vec<(String, String)> = edges
        .iter()
        .map(|e| {
            let (a, b) = (e.from.to_string(), e.to.to_string());
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        [
            ("X".to_string(), "Y".to_string()),
            ("Y".to_string(), "Z".to_string())
        ]
    );
}

#[test]
fn acyclic_ordering_respects_every_edge() {
    let graph = load_graph("5\nE D C B A\n5\nA B 1\nA C 1\nB D 1\nC D 1\nD E 1\n").unwrap();
    let TopoSort::Ordered(order) = topo_sort(&graph) else {
        panic!("diamond is acyclic");
    };
    assert_eq!(order.len(), 5);
    let pos = |name: &str| order.iter().position(|n| n.as_ref() == name).unwrap();
    for (from, to, _) in graph.edge_triples() {
        assert!(
            pos(from) < pos(to),
            "edge {from} -> {to} violated by {order:?}"
        );
    }
}

#[test]
fn load_fails_whole_on_unknown_endpoint() {
    let err = load_graph("2\nA B\n2\nA B 1\nA Missing 9\n").unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { name } if name == "Missing"));
}

#[test]
fn unknown_shortest_path_source_is_reported_by_name() {
    let graph = load_graph(CYCLIC_SAMPLE).unwrap();
    let err = shortest_paths(&graph, "Q").unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { name } if name == "Q"));
}

#[test]
fn unreachable_vertices_are_per_vertex_outcomes() {
    // A -> B, and an isolated island C -> D.
    let graph = load_graph("4\nA B C D\n2\nA B 3\nC D 1\n").unwrap();
    let paths = shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths.get("B").unwrap().distance, Some(3));
    for island in ["C", "D"] {
        let r = paths.get(island).unwrap();
        assert!(!r.reachable);
        assert_eq!(r.distance, None);
        assert!(r.path.is_empty());
    }
}

#[test]
fn disconnected_graph_has_no_spanning_tree() {
    let graph = load_graph("4\nA B C D\n2\nA B 3\nC D 1\n").unwrap();
    assert_eq!(minimum_spanning_tree(&graph), MstOutcome::NotConnected);
}

#[test]
fn loaded_graph_round_trips_through_the_report_format() {
    let graph = load_graph(CYCLIC_SAMPLE).unwrap();
    let reloaded = load_graph(&report::render_graph(&graph)).unwrap();
    let original: Vec<_> = graph
        .edge_triples()
        .map(|(f, t, c)| (f.to_string(), t.to_string(), c))
        .collect();
    let derived: Vec<_> = reloaded
        .edge_triples()
        .map(|(f, t, c)| (f.to_string(), t.to_string(), c))
        .collect();
    assert_eq!(original, derived);
}

#[test]
fn reports_render_the_expected_shapes() {
    let graph = load_graph(CYCLIC_SAMPLE).unwrap();

    let topo = report::render_topo_sort(&topo_sort(&graph));
    assert!(topo.contains("cannot be topologically sorted"));

    let paths = report::render_shortest_paths(&shortest_paths(&graph, "A").unwrap());
    assert!(paths.contains("D: cost 13, A --> B --> C --> D"));

    let mst = report::render_mst(&minimum_spanning_tree(
        &load_graph(TRIANGLE_SAMPLE).unwrap(),
    ));
    assert!(mst.contains("Total cost: 3"));
}
