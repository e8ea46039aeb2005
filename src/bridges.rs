//! Bridge detection via a depth-first low-link traversal.
//!
//! An edge is a bridge when no back edge skips over it: with `disc[v]` the
//! DFS discovery index and `low[u]` the smallest discovery index reachable
//! from `u`'s subtree, tree edge `(v, u)` is a bridge iff `low[u] > disc[v]`.
//! On a tree this reports every edge, which is exactly what the cut-move
//! needs at the minimal edge count.

use crate::graph::{EdgeSet, Graph};

/// All bridge edges of `g`, as a canonical sorted edge set.
pub fn bridges(g: &Graph) -> EdgeSet {
    let n = g.n();
    let mut state = Dfs {
        g,
        disc: vec![usize::MAX; n],
        low: vec![0; n],
        timer: 0,
        found: Vec::new(),
    };
    for root in 0..n {
        if state.disc[root] == usize::MAX {
            state.visit(root, usize::MAX);
        }
    }
    let mut found = state.found;
    found.sort_unstable();
    found
}

/// The edges of `g` that are legal to cut: everything except the bridges.
pub fn non_bridges(g: &Graph) -> EdgeSet {
    let bridges = bridges(g);
    g.edge_set()
        .into_iter()
        .filter(|e| bridges.binary_search(e).is_err())
        .collect()
}

struct Dfs<'a> {
    g: &'a Graph,
    disc: Vec<usize>,
    low: Vec<usize>,
    timer: usize,
    found: Vec<(usize, usize)>,
}

impl Dfs<'_> {
    fn visit(&mut self, v: usize, parent: usize) {
        self.disc[v] = self.timer;
        self.low[v] = self.timer;
        self.timer += 1;
        for idx in 0..self.g.neighbors(v).len() {
            let (u, _) = self.g.neighbors(v)[idx];
            // Simple graph: at most one edge leads back to the parent.
            if u == parent {
                continue;
            }
            if self.disc[u] == usize::MAX {
                self.visit(u, v);
                self.low[v] = self.low[v].min(self.low[u]);
                if self.low[u] > self.disc[v] {
                    self.found.push((v.min(u), v.max(u)));
                }
            } else {
                self.low[v] = self.low[v].min(self.disc[u]);
            }
        }
    }
}
