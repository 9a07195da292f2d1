use tracing::debug;

use super::*;

/// Topological orderings of directed graphs
pub trait TopologicalSort: AdjacencyList {
    /// Returns all vertices such that for every edge `u -> v`, `u` precedes `v`.
    ///
    /// Runs a depth-first search from every source and emits vertices in reverse
    /// post-order. The set of finished vertices is shared between searches.
    ///
    /// # Errors
    /// [`GraphError::CycleDetected`] if an edge leads back to a vertex on the current search
    /// path, or if some vertex is not reachable from any source.
    fn topological_order(&self) -> Result<Vec<VertexId>>
    where
        Self: GraphType<Dir: Oriented>,
    {
        let mut order = Vec::with_capacity(self.order() as usize);
        let mut finished = VertexSet::default();
        let mut on_path = VertexSet::default();
        let mut stack: Vec<(VertexId, NeighborIter<'_>)> = Vec::new();

        for source in self.source_ids() {
            on_path.insert(source);
            stack.push((source, self.neighbors_of(source, Adjacency::Successors)));

            while let Some((u, successors)) = stack.last_mut() {
                let u = *u;
                match successors.next() {
                    Some(v) if on_path.contains(&v) => {
                        debug!(from = %u, to = %v, "back edge in topological sort");
                        return Err(GraphError::CycleDetected);
                    }
                    Some(v) if finished.contains(&v) => {}
                    Some(v) => {
                        on_path.insert(v);
                        stack.push((v, self.neighbors_of(v, Adjacency::Successors)));
                    }
                    None => {
                        stack.pop();
                        on_path.remove(&u);
                        finished.insert(u);
                        order.push(u);
                    }
                }
            }
        }

        if order.len() < self.order() as usize {
            debug!(
                sorted = order.len(),
                order = self.order(),
                "cycle unreachable from any source"
            );
            return Err(GraphError::CycleDetected);
        }

        order.reverse();
        Ok(order)
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    fn assert_topological<G: AdjacencyList>(graph: &G, order: &[VertexId]) {
        assert_eq!(order.len(), graph.order() as usize);
        let rank: VertexMap<usize> = order.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        for Edge(u, v) in graph.edges() {
            assert!(rank[&u] < rank[&v], "{u} must precede {v}");
        }
    }

    #[test]
    fn chain() {
        let graph: Digraph<u32> = Graph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let order = graph.topological_order().unwrap();
        assert_eq!(graph.payloads(order).copied().collect_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn multiple_sources() {
        let graph: Digraph<u32> = Graph::from_edges([(2, 0), (1, 0), (0, 3), (0, 4), (3, 4)]);
        let order = graph.topological_order().unwrap();
        assert_topological(&graph, &order);
    }

    #[test]
    fn agrees_with_kahn_on_random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..30 {
            let n = rng.random_range(1..60);
            let dag = random_dag(rng, n, 2 * n);

            assert_eq!(dag.topo_search().count(), dag.order() as usize);
            assert_topological(&dag, &dag.topological_order().unwrap());
        }
    }

    #[test]
    fn cycles_are_rejected() {
        let mut graph: Digraph<u32> = Graph::from_edges([(0, 1), (1, 2)]);
        graph.add_edge(&2, &1);
        assert_eq!(graph.topological_order(), Err(GraphError::CycleDetected));

        // every vertex lies on the cycle, so there is no source at all
        let graph: Digraph<u32> = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.topological_order(), Err(GraphError::CycleDetected));
    }

    #[test]
    fn deep_chain() {
        let n = 100_000;
        let graph: Digraph<u32> = Graph::from_edges((0..n).map(|i| (i, i + 1)));
        assert_eq!(graph.topological_order().unwrap().len(), n as usize + 1);
    }
}
