//! Random instances and invariant checks shared by the unit tests

use std::hash::Hash;

use rand::Rng;

use crate::prelude::*;

/// Creates a graph on payloads `0..n` with at most `m` random edges (self-loops included)
pub(crate) fn random_graph<D: Direction, R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
) -> Graph<u32, D> {
    let mut graph = Graph::with_capacity(n as usize);
    for u in 0..n {
        graph.add_vertex(u);
    }
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge(&u, &v);
    }
    graph
}

/// Creates an acyclic graph on payloads `0..n` where every edge `u -> v` satisfies `u < v`
pub(crate) fn random_dag<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Dag<u32> {
    let mut graph = Dag::with_capacity(n as usize);
    for u in 0..n {
        graph.add_vertex(u);
    }
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.add_edge(&u.min(v), &u.max(v));
        }
    }
    graph
}

/// Creates a random tree on payloads `0..n`: every `i > 0` is attached to some `j < i`
pub(crate) fn random_tree<R: Rng>(rng: &mut R, n: NumNodes) -> UnGraph<u32> {
    let mut graph = UnGraph::with_capacity(n as usize);
    for u in 0..n {
        graph.add_vertex(u);
    }
    for v in 1..n {
        let u = rng.random_range(0..v);
        assert!(graph.add_edge(&u, &v));
    }
    graph
}

/// Asserts that both neighborhoods mirror each other and that all counters are accurate
pub(crate) fn assert_consistent<T: Hash + Eq, D: Direction>(graph: &Graph<T, D>) {
    let mut num_edges = 0;

    for u in graph.vertex_ids() {
        let vertex = graph.vertex(u).unwrap();
        assert_eq!(vertex.id(), u);
        assert_eq!(graph.id_of(vertex.value()), Some(u));

        for v in vertex.successors().neighbors() {
            assert!(graph.vertex(v).unwrap().has_predecessor(u), "{u} -> {v}");
        }
        for v in vertex.predecessors().neighbors() {
            assert!(graph.vertex(v).unwrap().has_successor(u), "{v} -> {u}");
        }

        num_edges += vertex.out_degree();
    }

    assert_eq!(graph.number_of_edges(), num_edges);
    assert_eq!(graph.order() as usize, graph.vertex_ids().count());
    assert_eq!(graph.order() as usize, graph.vertices().count());
}
