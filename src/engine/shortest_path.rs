//! Single-source shortest paths via lazy-deletion Dijkstra.
//!
//! The frontier is a binary min-heap of `(cost, to, from)` candidate entries.
//! Relaxing a vertex pushes fresh entries without removing superseded ones;
//! a popped entry whose target is already settled is simply discarded. This
//! deliberately trades heap size for the complexity of a decrease-key
//! structure.
//!
//! Ties among equal-cost frontier entries break on `(to, from)` ascending, so
//! the predecessor table (and therefore every reported path) is a
//! deterministic function of the loaded graph.
//!
//! Correctness requires non-negative edge costs. The precondition is not
//! validated; negative costs yield an unspecified numeric result.
//! Accumulated costs saturate at [`i64::MAX`] rather than wrapping, so a
//! total beyond the representable range reports the saturated distance
//! instead of a spurious negative one.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

use crate::engine::errors::GraphError;
use crate::engine::graph::{DiGraph, VertexId};

/// The shortest-path result for a single target vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    /// The target vertex name.
    pub vertex: Arc<str>,
    /// Whether any path from the source reaches this vertex.
    pub reachable: bool,
    /// The minimum total cost, or `None` for an unreachable vertex. Absence
    /// is the only representation of "infinite" distance; every `Some` value
    /// is a real path cost.
    pub distance: Option<i64>,
    /// The minimum-cost path, source first, target last. `[source]` for the
    /// source itself; empty for an unreachable vertex.
    pub path: Vec<Arc<str>>,
}

/// Per-vertex shortest-path results from one source, in vertex index order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths {
    source: Arc<str>,
    entries: Vec<PathReport>,
}

impl ShortestPaths {
    /// Returns the source vertex name.
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// Returns every per-vertex report, in vertex index order.
    pub fn entries(&self) -> &[PathReport] {
        &self.entries
    }

    /// Looks up the report for a vertex by name.
    pub fn get(&self, vertex: &str) -> Option<&PathReport> {
        self.entries.iter().find(|r| r.vertex.as_ref() == vertex)
    }
}

/// A candidate frontier entry: reaching `to` through `from` at total `cost`.
///
/// The derived ordering is lexicographic over the field order, which is
/// exactly the documented `(cost, to, from)` tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    cost: i64,
    to: VertexId,
    from: VertexId,
}

/// Transient per-vertex state while the solver runs.
#[derive(Debug, Clone, Copy)]
struct PathSlot {
    settled: bool,
    distance: Option<i64>,
    predecessor: Option<VertexId>,
}

impl PathSlot {
    const UNREACHED: Self = Self {
        settled: false,
        distance: None,
        predecessor: None,
    };
}

/// Computes minimum-cost paths from `source` to every vertex of `graph`.
///
/// Unreachable vertices are reported per-vertex (`reachable: false`), not as
/// a global failure.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `source` does not name a vertex.
pub fn shortest_paths(graph: &DiGraph, source: &str) -> Result<ShortestPaths, GraphError> {
    let src = graph
        .resolve(source)
        .ok_or_else(|| GraphError::UnknownVertex {
            name: source.to_string(),
        })?;

    let mut slots = vec![PathSlot::UNREACHED; graph.vertex_count()];
    slots[src.index()] = PathSlot {
        settled: true,
        distance: Some(0),
        predecessor: None,
    };
    let mut settled_count = 1;

    let mut frontier = BinaryHeap::new();
    for edge in graph.edges_of(src) {
        frontier.push(Reverse(FrontierEntry {
            cost: edge.cost,
            to: edge.to,
            from: src,
        }));
    }

    while settled_count < graph.vertex_count() {
        let Some(Reverse(entry)) = frontier.pop() else {
            break;
        };
        let slot = &mut slots[entry.to.index()];
        if slot.settled {
            // Lazy deletion: a cheaper entry already settled this vertex.
            continue;
        }
        slot.settled = true;
        slot.distance = Some(entry.cost);
        slot.predecessor = Some(entry.from);
        settled_count += 1;

        for edge in graph.edges_of(entry.to) {
            if !slots[edge.to.index()].settled {
                frontier.push(Reverse(FrontierEntry {
                    cost: entry.cost.saturating_add(edge.cost),
                    to: edge.to,
                    from: entry.to,
                }));
            }
        }
    }

    let entries = graph
        .vertex_ids()
        .map(|v| {
            let slot = slots[v.index()];
            PathReport {
                vertex: Arc::clone(graph.name_of(v)),
                reachable: slot.settled,
                distance: slot.distance,
                path: if slot.settled {
                    reconstruct_path(graph, &slots, v)
                } else {
                    Vec::new()
                },
            }
        })
        .collect();

    Ok(ShortestPaths {
        source: Arc::clone(graph.name_of(src)),
        entries,
    })
}

/// Walks predecessor links from `target` back to the source (the vertex with
/// no predecessor) and reverses into forward order.
fn reconstruct_path(graph: &DiGraph, slots: &[PathSlot], target: VertexId) -> Vec<Arc<str>> {
    let mut path = vec![Arc::clone(graph.name_of(target))];
    let mut cursor = target;
    while let Some(prev) = slots[cursor.index()].predecessor {
        path.push(Arc::clone(graph.name_of(prev)));
        cursor = prev;
    }
    path.reverse();
    path
}
