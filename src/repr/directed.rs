/*!
Operations that only make sense if edges carry a direction. They are available on
[`Digraph`] and [`Dag`] alike; the topological sort is reserved for [`Dag`].
*/

use std::hash::Hash;

use fxhash::FxHashSet;

use crate::algo::{TopologicalSort, Traversal};

use super::*;

impl<T: Hash + Eq, D: Oriented> Graph<T, D> {
    /// Returns the number of predecessors of a vertex
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn in_degree<K: VertexKey<T>>(&self, key: K) -> Result<NumNodes> {
        Ok(self.get_vertex(key)?.in_degree())
    }

    /// Returns the number of successors of a vertex
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn out_degree<K: VertexKey<T>>(&self, key: K) -> Result<NumNodes> {
        Ok(self.get_vertex(key)?.out_degree())
    }

    /// Returns the payloads of the direct successors of a vertex
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn successors<K: VertexKey<T>>(&self, key: K) -> Result<impl Iterator<Item = &T> + '_> {
        let u = self.resolve(key)?;
        Ok(self.payloads(self.neighbors_of(u, Adjacency::Successors)))
    }

    /// Returns the payloads of the direct predecessors of a vertex
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn predecessors<K: VertexKey<T>>(
        &self,
        key: K,
    ) -> Result<impl Iterator<Item = &T> + '_> {
        let u = self.resolve(key)?;
        Ok(self.payloads(self.neighbors_of(u, Adjacency::Predecessors)))
    }

    /// Returns all vertices reachable from a vertex by following edges forward,
    /// including the vertex itself
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn direct_transitive_closure<K: VertexKey<T>>(&self, key: K) -> Result<FxHashSet<&T>> {
        self.closure_by(key, Adjacency::Successors)
    }

    /// Returns all vertices from which a vertex can be reached, including the vertex itself
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn indirect_transitive_closure<K: VertexKey<T>>(
        &self,
        key: K,
    ) -> Result<FxHashSet<&T>> {
        self.closure_by(key, Adjacency::Predecessors)
    }

    /// Returns *true* if the arc `a -> b` exists. An unknown `b` is never a successor.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if `a` does not identify a vertex.
    pub fn contains_arc<A, B>(&self, a: A, b: B) -> Result<bool>
    where
        A: VertexKey<T>,
        B: VertexKey<T>,
    {
        let origin = self.get_vertex(a)?;
        Ok(b.resolve(self).is_some_and(|v| origin.has_successor(v)))
    }

    /// Returns the payloads of all vertices without predecessors
    pub fn sources(&self) -> impl Iterator<Item = &T> + '_ {
        self.payloads(self.source_ids())
    }

    /// Returns *true* if the graph has no directed cycle
    pub fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.order as usize
    }
}

impl<T> Graph<T, Acyclic> {
    /// Returns all vertices such that for every edge `u -> v`, `u` precedes `v`
    ///
    /// Every source seeds a depth-first search; a vertex is placed in front of the order
    /// once all of its successors are finished.
    ///
    /// # Errors
    /// [`GraphError::CycleDetected`] if the graph is not acyclic after all.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::prelude::*;
    ///
    /// let dag: Dag<char> = Graph::from_edges([('a', 'b'), ('b', 'c')]);
    /// assert_eq!(dag.topological_sort().unwrap(), vec![&'a', &'b', &'c']);
    /// ```
    pub fn topological_sort(&self) -> Result<Vec<&T>> {
        let order = self.topological_order()?;
        Ok(self.payloads(order).collect())
    }

    /// Forgets the acyclicity assumption
    pub fn into_digraph(self) -> Digraph<T> {
        self.retag()
    }
}

impl<T> TryFrom<Digraph<T>> for Dag<T> {
    type Error = GraphError;

    /// Converts a [`Digraph`] into a [`Dag`] if it has no directed cycle
    fn try_from(graph: Digraph<T>) -> Result<Self> {
        if graph.topo_search().count() == graph.order as usize {
            Ok(graph.retag())
        } else {
            Err(GraphError::CycleDetected)
        }
    }
}

impl<T, D: Direction> Graph<T, D> {
    fn retag<E: Direction>(self) -> Graph<T, E> {
        Graph {
            storage: self.storage,
            index: self.index,
            next_id: self.next_id,
            order: self.order,
            num_edges: self.num_edges,
            _dir: PhantomData,
        }
    }
}
