//! Bridge classification on trees, cycles, and mixed graphs.

use graphmcmc::bridges::{bridges, non_bridges};
use graphmcmc::graph::Graph;

fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::empty(n);
    for &(i, j) in edges {
        g.add_edge(i, j, 1.0);
    }
    g
}

#[test]
fn every_tree_edge_is_a_bridge() {
    let path = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(bridges(&path), vec![(0, 1), (1, 2), (2, 3)]);
    assert!(non_bridges(&path).is_empty());

    let star = graph_from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(bridges(&star).len(), 3);
}

#[test]
fn cycle_edges_are_never_bridges() {
    let triangle = graph_from_edges(3, &[(0, 1), (1, 2), (0, 2)]);
    assert!(bridges(&triangle).is_empty());
    assert_eq!(non_bridges(&triangle).len(), 3);

    let square = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
    assert!(bridges(&square).is_empty());
}

#[test]
fn pendant_edge_on_a_cycle_is_the_only_bridge() {
    let g = graph_from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
    assert_eq!(bridges(&g), vec![(2, 3)]);
    assert_eq!(non_bridges(&g), vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn overlapping_cycles_share_no_bridges() {
    // Two triangles sharing vertex 2 (a cut vertex, but no cut edges).
    let bowtie = graph_from_edges(
        5,
        &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)],
    );
    assert!(bridges(&bowtie).is_empty());

    // Two squares sharing the edge (1,4): every edge lies on a cycle.
    let squares = graph_from_edges(
        6,
        &[(0, 1), (1, 4), (3, 4), (0, 3), (1, 2), (2, 5), (4, 5)],
    );
    assert!(bridges(&squares).is_empty());
}

#[test]
fn bridge_between_two_cycles_is_found() {
    // Triangle 0-1-2 and triangle 3-4-5 joined by the single edge (2,3).
    let g = graph_from_edges(
        6,
        &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)],
    );
    assert_eq!(bridges(&g), vec![(2, 3)]);
    assert_eq!(non_bridges(&g).len(), 6);
}
