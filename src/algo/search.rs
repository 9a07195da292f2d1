/*!
# Path Search

Depth-first search for a goal vertex. [`find_path`] answers whether `goal` can be reached
from `start` (ignoring edge orientation); [`PathSearch`] exposes the same search as a
configurable struct that can additionally reconstruct the route it found.
*/

use std::hash::Hash;

use super::*;

/// Searches `graph` depth-first for `goal`, starting at `start` and following edges in both
/// directions.
///
/// Returns the goal's payload if it is reachable, `None` if it is not or if `goal` is not a
/// vertex of the graph.
///
/// # Errors
/// [`GraphError::NoSuchVertex`] if `start` is not a vertex of the graph.
///
/// # Examples
/// ```
/// use pgraphs::{prelude::*, find_path};
///
/// let graph: UnGraph<u32> = Graph::from_edges([(1, 2), (2, 3), (4, 5)]);
///
/// assert_eq!(find_path(&graph, &1, &3), Ok(Some(&3)));
/// assert_eq!(find_path(&graph, &1, &5), Ok(None));
/// ```
pub fn find_path<'a, T, D>(graph: &'a Graph<T, D>, start: &T, goal: &T) -> Result<Option<&'a T>>
where
    T: Hash + Eq,
    D: Direction,
{
    PathSearch::new(graph).reachable(start, goal)
}

/// Configurable depth-first path search.
///
/// # Examples
/// ```
/// use pgraphs::{prelude::*, algo::PathSearch};
///
/// let graph: Digraph<char> = Graph::from_edges([('a', 'b'), ('b', 'c'), ('d', 'c')]);
///
/// let path = PathSearch::new(&graph)
///     .follow(Adjacency::Successors)
///     .path(&'a', &'c')
///     .unwrap();
/// assert_eq!(path, Some(vec![&'a', &'b', &'c']));
///
/// let search = PathSearch::new(&graph).follow(Adjacency::Successors);
/// assert_eq!(search.reachable(&'d', &'a'), Ok(None));
/// ```
#[derive(Debug, Clone)]
pub struct PathSearch<'a, T, D: Direction> {
    graph: &'a Graph<T, D>,
    adjacency: Adjacency,
    excluded: VertexSet,
}

impl<'a, T, D> PathSearch<'a, T, D>
where
    T: Hash + Eq,
    D: Direction,
{
    /// Creates a search following edges in both directions
    pub fn new(graph: &'a Graph<T, D>) -> Self {
        Self {
            graph,
            adjacency: Adjacency::Both,
            excluded: VertexSet::default(),
        }
    }

    /// Sets which neighbors the search follows
    pub fn set_follow(&mut self, adjacency: Adjacency) {
        self.adjacency = adjacency;
    }

    /// Builder variant of [`PathSearch::set_follow`]
    pub fn follow(mut self, adjacency: Adjacency) -> Self {
        self.set_follow(adjacency);
        self
    }

    /// Forbids the search to enter a vertex. Keys that do not identify a vertex are ignored.
    /// Excluding the start or the goal vertex itself has no effect.
    pub fn set_excluded<K: VertexKey<T>>(&mut self, key: K) {
        if let Some(u) = key.resolve(self.graph) {
            self.excluded.insert(u);
        }
    }

    /// Builder variant of [`PathSearch::set_excluded`]
    pub fn exclude<K: VertexKey<T>>(mut self, key: K) -> Self {
        self.set_excluded(key);
        self
    }

    /// Returns the goal's payload if it can be reached from `start`.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if `start` is not a vertex of the graph.
    pub fn reachable<S, G>(&self, start: S, goal: G) -> Result<Option<&'a T>>
    where
        S: VertexKey<T>,
        G: VertexKey<T>,
    {
        let s = self.graph.resolve(start)?;
        let Some(g) = goal.resolve(self.graph) else {
            return Ok(None);
        };

        let found = self.search(s, g).any(|x| x.item() == g);
        Ok(found.then(|| self.graph.value_of(g)).flatten())
    }

    /// Returns the route `start ..= goal` taken by the depth-first search, if `goal` can be
    /// reached. The route is not necessarily a shortest one.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if `start` is not a vertex of the graph.
    pub fn path<S, G>(&self, start: S, goal: G) -> Result<Option<Vec<&'a T>>>
    where
        S: VertexKey<T>,
        G: VertexKey<T>,
    {
        let s = self.graph.resolve(start)?;
        let Some(g) = goal.resolve(self.graph) else {
            return Ok(None);
        };

        let mut parents = VertexMap::default();
        for item in self.search(s, g) {
            if let Some(p) = item.predecessor() {
                parents.insert(item.item(), p);
            }
        }
        if s != g && !parents.contains_key(&g) {
            return Ok(None);
        }

        let mut route = vec![g];
        let mut u = g;
        while let Some(&p) = parents.get(&u) {
            route.push(p);
            u = p;
        }
        route.reverse();

        Ok(Some(self.graph.payloads(route).collect()))
    }

    fn search(&self, start: VertexId, goal: VertexId) -> DfsWithPredecessor<'a, Graph<T, D>> {
        self.graph
            .dfs_with_predecessor(start, self.adjacency)
            .with_nodes_excluded(
                self.excluded
                    .iter()
                    .copied()
                    .filter(|&u| u != start && u != goal),
            )
            .stop_at(goal)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    #[test]
    fn components() {
        let graph: UnGraph<u32> = Graph::from_edges([(1, 2), (2, 3), (4, 5)]);

        assert_eq!(find_path(&graph, &1, &3), Ok(Some(&3)));
        assert_eq!(find_path(&graph, &3, &1), Ok(Some(&1)));
        assert_eq!(find_path(&graph, &1, &5), Ok(None));
        assert_eq!(find_path(&graph, &4, &5), Ok(Some(&5)));
    }

    #[test]
    fn start_and_goal_lookup() {
        let graph: UnGraph<u32> = Graph::from_edges([(1, 2)]);

        assert_eq!(find_path(&graph, &1, &1), Ok(Some(&1)));
        assert_eq!(find_path(&graph, &1, &9), Ok(None));
        assert_eq!(find_path(&graph, &9, &1), Err(GraphError::NoSuchVertex));
    }

    #[test]
    fn orientation_is_ignored_by_default() {
        let graph: Digraph<u32> = Graph::from_edges([(1, 2), (3, 2)]);

        assert_eq!(find_path(&graph, &1, &3), Ok(Some(&3)));

        let forward = PathSearch::new(&graph).follow(Adjacency::Successors);
        assert_eq!(forward.reachable(&1, &3), Ok(None));
        assert_eq!(forward.reachable(&1, &2), Ok(Some(&2)));

        let backward = PathSearch::new(&graph).follow(Adjacency::Predecessors);
        assert_eq!(backward.reachable(&2, &3), Ok(Some(&3)));
        assert_eq!(backward.reachable(&1, &2), Ok(None));
    }

    #[test]
    fn exclusion_blocks_routes() {
        //   2
        //  / \
        // 1   4
        //  \ /
        //   3
        let graph: UnGraph<u32> = Graph::from_edges([(1, 2), (2, 4), (1, 3), (3, 4)]);

        let search = PathSearch::new(&graph).exclude(&2);
        assert_eq!(search.path(&1, &4).unwrap(), Some(vec![&1, &3, &4]));

        let search = search.exclude(&3);
        assert_eq!(search.reachable(&1, &4), Ok(None));

        // the endpoints themselves cannot be excluded
        let search = PathSearch::new(&graph).exclude(&1).exclude(&4);
        assert_eq!(search.reachable(&1, &4), Ok(Some(&4)));
    }

    #[test]
    fn trivial_path() {
        let graph: UnGraph<u32> = Graph::from_edges([(1, 2)]);
        let search = PathSearch::new(&graph);

        assert_eq!(search.path(&1, &1).unwrap(), Some(vec![&1]));
        assert_eq!(search.path(&1, &7).unwrap(), None);
        assert!(search.path(&7, &1).is_err());
    }

    #[test]
    fn random_paths_are_walks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..30 {
            let n = rng.random_range(2..40);
            let graph: Digraph<u32> = random_graph(rng, n, 2 * n);
            let search = PathSearch::new(&graph).follow(Adjacency::Successors);

            let (s, g) = (rng.random_range(0..n), rng.random_range(0..n));
            let reachable = graph.direct_transitive_closure(&s).unwrap().contains(&g);

            match search.path(&s, &g).unwrap() {
                Some(path) => {
                    assert!(reachable);
                    assert_eq!(path.first(), Some(&&s));
                    assert_eq!(path.last(), Some(&&g));
                    for w in path.windows(2) {
                        assert_eq!(graph.contains_arc(w[0], w[1]), Ok(true));
                    }
                }
                None => assert!(!reachable),
            }
            assert_eq!(search.reachable(&s, &g).unwrap().is_some(), reachable);
        }
    }
}
