use crate::points::PointSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Canonical representation of a graph's edge set: every edge as an
/// `(i, j)` pair with `i < j`, lexicographically sorted. Weights are a
/// pure function of the fixed vertex positions, so this is a sound and
/// collision-free hash key for visitation counting.
pub type EdgeSet = Vec<(usize, usize)>;

/// A simple undirected weighted graph on the vertex set `0..n-1`.
///
/// Stored as an adjacency list carrying the edge weight on both endpoint
/// entries. The sampler keeps two of these alive: the accepted `current`
/// state and the `proposal` it mutates during a step.
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<(usize, f64)>>,
    edges: usize,
}

impl Graph {
    /// An edgeless graph on `n` vertices.
    pub fn empty(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: 0,
        }
    }

    /// The minimal connected starting configuration: a path visiting the
    /// vertices in index order, each edge weighted by the distance between
    /// the corresponding points.
    pub fn path(points: &PointSet) -> Self {
        let mut g = Self::empty(points.n());
        for i in 0..points.min_edges() {
            g.add_edge(i, i + 1, points.distance(i, i + 1));
        }
        g
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    #[inline(always)]
    pub fn m(&self) -> usize {
        self.edges
    }

    /// Degree of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adj[i].iter().any(|&(u, _)| u == j)
    }

    /// Weight of the edge `(i, j)` if present.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        self.adj[i].iter().find(|&&(u, _)| u == j).map(|&(_, w)| w)
    }

    /// Insert the edge `(i, j)` with the given weight. Self-loops and
    /// duplicate edges are ignored, not errors (simple-graph semantics).
    pub fn add_edge(&mut self, i: usize, j: usize, w: f64) {
        if i == j || self.has_edge(i, j) {
            return;
        }
        self.adj[i].push((j, w));
        self.adj[j].push((i, w));
        self.edges += 1;
    }

    /// Remove the edge `(i, j)` if it exists and neither endpoint would be
    /// left isolated. Returns whether an edge was removed.
    ///
    /// This guard is weaker than "stay connected" on purpose: connectivity
    /// is preserved by the caller only ever cutting non-bridge edges.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> bool {
        if !self.has_edge(i, j) || self.degree(i) <= 1 || self.degree(j) <= 1 {
            return false;
        }
        self.adj[i].retain(|&(u, _)| u != j);
        self.adj[j].retain(|&(u, _)| u != i);
        self.edges -= 1;
        true
    }

    /// Neighbors of `v` with edge weights.
    pub fn neighbors(&self, v: usize) -> &[(usize, f64)] {
        &self.adj[v]
    }

    /// The canonical sorted edge set (see [`EdgeSet`]).
    pub fn edge_set(&self) -> EdgeSet {
        let mut edges: EdgeSet = (0..self.n())
            .flat_map(|i| {
                self.adj[i]
                    .iter()
                    .filter(move |&&(j, _)| i < j)
                    .map(move |&(j, _)| (i, j))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Σ of all edge weights, each edge counted once.
    pub fn total_weight(&self) -> f64 {
        (0..self.n())
            .flat_map(|i| self.adj[i].iter().filter(move |&&(j, _)| i < j))
            .map(|&(_, w)| w)
            .sum()
    }

    /// Breadth-first reachability check from vertex 0.
    pub fn is_connected(&self) -> bool {
        let n = self.n();
        if n == 0 {
            return true;
        }
        let mut seen = vec![false; n];
        let mut queue = std::collections::VecDeque::from([0usize]);
        seen[0] = true;
        let mut count = 1;
        while let Some(v) = queue.pop_front() {
            for &(u, _) in &self.adj[v] {
                if !seen[u] {
                    seen[u] = true;
                    count += 1;
                    queue.push_back(u);
                }
            }
        }
        count == n
    }

    /// Single-source shortest-path distances from vertex 0, using edge
    /// weights as lengths (Dijkstra; all weights are non-negative).
    /// Unreachable vertices come back as infinity.
    pub fn distances_from_root(&self) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; self.n()];
        if self.n() == 0 {
            return dist;
        }
        dist[0] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry {
            dist: 0.0,
            vertex: 0,
        });
        while let Some(HeapEntry { dist: d, vertex: v }) = heap.pop() {
            if d > dist[v] {
                continue; // stale entry
            }
            for &(u, w) in &self.adj[v] {
                let next = d + w;
                if next < dist[u] {
                    dist[u] = next;
                    heap.push(HeapEntry {
                        dist: next,
                        vertex: u,
                    });
                }
            }
        }
        dist
    }
}

/// Min-heap entry for Dijkstra; `BinaryHeap` is a max-heap, so the
/// ordering is reversed.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    dist: f64,
    vertex: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
