//! Union-find (disjoint set) over vertex indices.
//!
//! Path compression uses iterative path-halving: during [`DisjointSet::find`]
//! each visited vertex is pointed at its grandparent, halving the path length
//! without a second pass or recursion. Union-by-rank keeps the trees shallow;
//! when ranks are equal the lower index becomes the root, so `find` returns a
//! deterministic representative for any given merge history.

use crate::engine::graph::VertexId;

/// A disjoint-set forest with path-halving and union-by-rank.
///
/// Each vertex starts as its own singleton component. The structure tracks
/// the live component count so the spanning-tree builder can stop as soon as
/// the graph collapses to a single component.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton components, one per vertex index in `[0, n)`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the canonical representative of `v`'s component.
    pub fn find(&mut self, v: VertexId) -> VertexId {
        let mut x = v.0 as usize;
        while self.parent[x] as usize != x {
            let grandparent = self.parent[self.parent[x] as usize];
            self.parent[x] = grandparent;
            x = grandparent as usize;
        }
        VertexId(x as u32)
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// Returns `true` when the merge leaves exactly one component, i.e. the
    /// forest now spans every vertex. A no-op union of two vertices already
    /// in the same component reports the current count unchanged.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let ra = self.find(a).0 as usize;
        let rb = self.find(b).0 as usize;

        if ra != rb {
            match self.rank[ra].cmp(&self.rank[rb]) {
                std::cmp::Ordering::Less => self.parent[ra] = rb as u32,
                std::cmp::Ordering::Greater => self.parent[rb] = ra as u32,
                std::cmp::Ordering::Equal => {
                    // Lower index wins the tie so representatives are stable.
                    let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                    self.parent[child] = root as u32;
                    self.rank[root] += 1;
                }
            }
            self.components -= 1;
        }

        self.components == 1
    }

    /// Returns the number of live components.
    pub fn components(&self) -> usize {
        self.components
    }
}
