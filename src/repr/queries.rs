use std::hash::Hash;

use fxhash::FxHashSet;

use crate::algo::{Cycles, Traversal};

use super::*;

impl<T, D: Direction> Graph<T, D> {
    /// Returns *true* if every vertex is adjacent to every other vertex, i.e. every vertex
    /// has degree `order - 1`. Vacuously *true* for the empty graph.
    pub fn is_complete(&self) -> bool {
        let target = self.order.saturating_sub(1);
        self.storage.values().all(|v| v.degree() == target)
    }
}

impl<T: Hash + Eq, D: Direction> Graph<T, D> {
    /// Returns the number of predecessors plus the number of successors of a vertex
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn degree<K: VertexKey<T>>(&self, key: K) -> Result<NumNodes> {
        Ok(self.get_vertex(key)?.degree())
    }

    /// Returns *true* if all vertices have the same degree as [`Graph::any_vertex`]
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn is_regular(&self) -> Result<bool> {
        let degree = self.degree(self.any_vertex_id()?)?;
        Ok(self.storage.values().all(|v| v.degree() == degree))
    }

    /// Returns the payloads of all neighbors of a vertex: successors followed by predecessors.
    /// Neighbors linked in both directions show up twice.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn adjacent<K: VertexKey<T>>(&self, key: K) -> Result<impl Iterator<Item = &T> + '_> {
        let u = self.resolve(key)?;
        Ok(self.payloads(self.neighbors_of(u, Adjacency::Both)))
    }

    /// Like [`Graph::adjacent`], but returns `None` for keys that do not identify a vertex
    pub fn get_adjacent<K: VertexKey<T>>(&self, key: K) -> Option<impl Iterator<Item = &T> + '_> {
        self.adjacent(key).ok()
    }

    /// Returns all vertices reachable from a vertex, ignoring edge orientation.
    /// The vertex itself is always part of its closure.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::prelude::*;
    ///
    /// let graph: Digraph<u32> = Graph::from_edges([(1, 2), (3, 2), (4, 5)]);
    ///
    /// let closure = graph.transitive_closure(&1).unwrap();
    /// assert_eq!(closure.len(), 3);
    /// assert!(closure.contains(&3));
    /// ```
    pub fn transitive_closure<K: VertexKey<T>>(&self, key: K) -> Result<FxHashSet<&T>> {
        self.closure_by(key, Adjacency::Both)
    }

    pub(super) fn closure_by<K: VertexKey<T>>(
        &self,
        key: K,
        adjacency: Adjacency,
    ) -> Result<FxHashSet<&T>> {
        let u = self.resolve(key)?;
        Ok(self.payloads(self.dfs(u, adjacency)).collect())
    }

    /// Returns *true* if every vertex is reachable from [`Graph::any_vertex`] (ignoring
    /// edge orientation)
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn is_connected(&self) -> Result<bool> {
        let start = self.any_vertex_id()?;
        // the closure is a subset of all vertices, so equal cardinality means equal sets
        Ok(self.dfs(start, Adjacency::Both).count() == self.order as usize)
    }

    /// Returns *true* if the graph is connected and has no cycle (ignoring edge orientation).
    ///
    /// A self-loop counts as a cycle, two edges `a -> b` and `b -> a` do not.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::prelude::*;
    ///
    /// let mut graph: UnGraph<u32> = Graph::from_edges([(1, 2), (2, 3)]);
    /// assert!(graph.is_tree().unwrap());
    ///
    /// graph.add_edge(&3, &1);
    /// assert!(!graph.is_tree().unwrap());
    /// ```
    pub fn is_tree(&self) -> Result<bool> {
        if !self.is_connected()? {
            return Ok(false);
        }
        Ok(!self.has_cycle_from(self.any_vertex_id()?))
    }
}
