use std::hash::Hash;

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Every method inserts missing vertices and returns the number of edges that were newly added.
/// Values for which no vertex can be inserted (see [`Graph::insert_vertex`]) are skipped.
pub trait GeneratorSubstructures<T> {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use pgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = Digraph::new();
    /// assert_eq!(g.connect_path([0, 1, 2, 3]), 3);
    ///
    /// assert_eq!(g.contains_arc(&0, &1), Ok(true));
    /// assert_eq!(g.contains_arc(&2, &3), Ok(true));
    /// ```
    fn connect_path<P>(&mut self, values_on_path: P) -> NumEdges
    where
        P: IntoIterator<Item = T>;

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first, so a single
    ///   vertex receives a self-loop.
    fn connect_cycle<C>(&mut self, values_in_cycle: C) -> NumEdges
    where
        C: IntoIterator<Item = T>;

    /// Connects all given vertices into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each vertex also gets a self-loop.
    /// - Undirected graphs receive one edge per pair, oriented by the order of `values`.
    fn connect_clique<C>(&mut self, values: C, with_loops: bool) -> NumEdges
    where
        C: IntoIterator<Item = T>;
}

impl<T, D> GeneratorSubstructures<T> for Graph<T, D>
where
    T: Hash + Eq + Clone,
    D: Direction,
{
    fn connect_path<P>(&mut self, values_on_path: P) -> NumEdges
    where
        P: IntoIterator<Item = T>,
    {
        let ids = values_on_path
            .into_iter()
            .filter_map(|x| self.insert_vertex(x).ok())
            .collect_vec();

        let mut added = 0;
        for (u, v) in ids.into_iter().tuple_windows() {
            added += self.link(u, v) as NumEdges;
        }
        added
    }

    fn connect_cycle<C>(&mut self, values_in_cycle: C) -> NumEdges
    where
        C: IntoIterator<Item = T>,
    {
        let ids = values_in_cycle
            .into_iter()
            .filter_map(|x| self.insert_vertex(x).ok())
            .collect_vec();

        let (Some(&first), Some(&last)) = (ids.first(), ids.last()) else {
            return 0;
        };

        let mut added = 0;
        for (u, v) in ids.into_iter().tuple_windows() {
            added += self.link(u, v) as NumEdges;
        }
        added + self.link(last, first) as NumEdges
    }

    fn connect_clique<C>(&mut self, values: C, with_loops: bool) -> NumEdges
    where
        C: IntoIterator<Item = T>,
    {
        let ids = values
            .into_iter()
            .filter_map(|x| self.insert_vertex(x).ok())
            .unique()
            .collect_vec();

        let mut added = 0;
        for (i, &u) in ids.iter().enumerate() {
            for (j, &v) in ids.iter().enumerate() {
                if (!with_loops && Edge(u, v).is_loop()) || (!D::DIRECTED && j < i) {
                    continue;
                }
                added += self.link(u, v) as NumEdges;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = Digraph::<u32>::new();
            assert_eq!(g.connect_path([]), 0);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Digraph::new();
            assert_eq!(g.connect_path([1]), 0);
            assert_eq!(g.order(), 1);
        }

        {
            let mut g = Digraph::new();
            g.connect_path([2, 1]);
            assert_eq!(g.number_of_edges(), 1);
            assert_eq!(g.contains_arc(&2, &1), Ok(true));
        }

        {
            let mut g = Digraph::new();
            g.add_edges([(0, 3)]);
            assert_eq!(g.connect_path([0, 3, 1, 4]), 2);
            assert_eq!(g.number_of_edges(), 3);
            assert_eq!(g.order(), 4);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = Digraph::<u32>::new();
            assert_eq!(g.connect_cycle([]), 0);
        }

        {
            let mut g = Digraph::new();
            assert_eq!(g.connect_cycle([1]), 1);
            assert_eq!(g.contains_arc(&1, &1), Ok(true));
        }

        {
            let mut g = Digraph::new();
            assert_eq!(g.connect_cycle([0, 3, 1, 4]), 4);
            assert_eq!(g.contains_arc(&4, &0), Ok(true));
            assert!(!g.is_acyclic());
        }

        {
            let mut g = UnGraph::new();
            g.connect_cycle(1..=5);
            assert_eq!(g.is_regular(), Ok(true));
            assert_eq!(g.degree(&3), Ok(2));
            assert_eq!(g.is_tree(), Ok(false));
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = UnGraph::<u32>::new();
            assert_eq!(g.connect_clique([], true), 0);
        }

        {
            let mut g = UnGraph::new();
            assert_eq!(g.connect_clique([1], false), 0);
            assert_eq!(g.connect_clique([1], true), 1);
        }

        {
            let mut g = UnGraph::new();
            assert_eq!(g.connect_clique([1, 2, 4], false), 3);
            assert!(g.is_complete());
        }

        {
            let mut g = Digraph::new();
            assert_eq!(g.connect_clique([1, 2, 4, 2], false), 6);
            assert_eq!(g.connect_clique([1, 2, 4], true), 3);
            assert_eq!(g.number_of_edges(), 9);
        }
    }
}
