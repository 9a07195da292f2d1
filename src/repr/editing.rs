use std::hash::Hash;

use tracing::{debug, trace};

use super::*;

impl<T: Hash + Eq + Clone, D: Direction> Graph<T, D> {
    /// Adds a new vertex storing `value`.
    /// Returns *false* if the graph already contains a vertex for `value`, or if no fresh
    /// vertex id is left.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::prelude::*;
    ///
    /// let mut graph = UnGraph::new();
    /// assert!(graph.add_vertex("a"));
    /// assert!(!graph.add_vertex("a"));
    /// assert_eq!(graph.order(), 1);
    /// ```
    pub fn add_vertex(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        self.insert_vertex(value).is_ok()
    }

    /// Returns the id of the vertex storing `value`, inserting the vertex if necessary
    ///
    /// # Errors
    /// [`GraphError::IdsExhausted`] if `value` is new and every id has been handed out before.
    pub fn insert_vertex(&mut self, value: T) -> Result<VertexId> {
        if let Some(&u) = self.index.get(&value) {
            return Ok(u);
        }

        let u = VertexId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(GraphError::IdsExhausted)?;

        self.index.insert(value.clone(), u);
        self.storage.insert(u, Vertex::new(u, value));
        self.order += 1;

        trace!(vertex = %u, order = self.order, "added vertex");
        Ok(u)
    }

    /// Adds the edge `a -> b`.
    /// Returns *false* if an endpoint is not part of the graph or the edge was already present.
    ///
    /// Edges of undirected graphs are stored in the role they are inserted with: adding
    /// `b -> a` after `a -> b` stores a second, reversed edge.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::prelude::*;
    ///
    /// let mut graph = UnGraph::new();
    /// graph.add_vertex(1);
    /// graph.add_vertex(2);
    ///
    /// assert!(graph.add_edge(&1, &2));
    /// assert!(!graph.add_edge(&1, &2));
    /// assert!(!graph.add_edge(&1, &3));
    /// ```
    pub fn add_edge<A, B>(&mut self, a: A, b: B) -> bool
    where
        A: VertexKey<T>,
        B: VertexKey<T>,
    {
        self.try_add_edge(a, b).unwrap_or(false)
    }

    /// Adds the edge `a -> b`.
    /// Returns *false* if the edge was already present.
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if an endpoint is not part of the graph.
    pub fn try_add_edge<A, B>(&mut self, a: A, b: B) -> Result<bool>
    where
        A: VertexKey<T>,
        B: VertexKey<T>,
    {
        let u = self.resolve(a)?;
        let v = self.resolve(b)?;
        Ok(self.link(u, v))
    }

    /// Adds all edges, inserting missing endpoints as new vertices.
    /// Edges with an endpoint that cannot be inserted (see [`Graph::insert_vertex`]) are skipped.
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (T, T)>,
    {
        for (a, b) in edges {
            match (self.insert_vertex(a), self.insert_vertex(b)) {
                (Ok(u), Ok(v)) => {
                    self.link(u, v);
                }
                _ => debug!("skipped edge, vertex ids exhausted"),
            }
        }
    }

    /// Creates a graph from an edge list, inserting every endpoint as a vertex
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Removes a vertex together with all its edges.
    /// Returns *false* if the key does not identify a vertex.
    pub fn remove_vertex<K: VertexKey<T>>(&mut self, key: K) -> bool {
        let Some(u) = key.resolve(self) else {
            return false;
        };
        let Some(mut vertex) = self.storage.remove(&u) else {
            return false;
        };

        let (successors, predecessors) = vertex.take_adjacency();
        for w in successors.neighbors() {
            if let Some(w) = self.vertex_mut(w) {
                w.remove_predecessor(u);
            }
        }
        for w in predecessors.neighbors() {
            if let Some(w) = self.vertex_mut(w) {
                w.remove_successor(u);
            }
        }

        // a self-loop is listed in both neighborhoods but is a single edge
        let self_loop = successors.has_neighbor(u) as NumEdges;
        self.num_edges -=
            successors.num_of_neighbors() + predecessors.num_of_neighbors() - self_loop;

        self.index.remove(vertex.value());
        self.order -= 1;

        trace!(vertex = %u, order = self.order, "removed vertex");
        true
    }

    /// Removes the edge between `a` and `b`.
    /// Returns *false* if no such edge exists.
    ///
    /// - For undirected graphs, `a -> b` is tried first and `b -> a` second.
    /// - For directed graphs, only `a -> b` is removed.
    pub fn remove_edge<A, B>(&mut self, a: A, b: B) -> bool
    where
        A: VertexKey<T>,
        B: VertexKey<T>,
    {
        let (Some(u), Some(v)) = (a.resolve(self), b.resolve(self)) else {
            return false;
        };

        self.unlink(u, v) || (!D::DIRECTED && self.unlink(v, u))
    }
}

impl<T, D: Direction> Graph<T, D> {
    /// Links `u -> v`. Both ids must be live.
    pub(crate) fn link(&mut self, u: VertexId, v: VertexId) -> bool {
        let linked = self.vertex_mut(u).is_some_and(|x| x.add_successor(v));
        if !linked {
            return false;
        }

        if let Some(y) = self.vertex_mut(v) {
            y.add_predecessor(u);
        }
        self.num_edges += 1;

        trace!(from = %u, to = %v, "added edge");
        true
    }

    /// Unlinks `u -> v` and returns *true* if the edge existed
    pub(super) fn unlink(&mut self, u: VertexId, v: VertexId) -> bool {
        let unlinked = self.vertex_mut(u).is_some_and(|x| x.remove_successor(v));
        if !unlinked {
            return false;
        }

        if let Some(y) = self.vertex_mut(v) {
            y.remove_predecessor(u);
        }
        self.num_edges -= 1;

        trace!(from = %u, to = %v, "removed edge");
        true
    }
}
