/*!
# Graph Representation

A single storage backend, [`Graph`], parameterized by the payload type `T` and a
[`Direction`] marker:

- [`UnGraph`] (`Graph<T, Undirected>`): the base graph,
- [`Digraph`] (`Graph<T, Directed>`): adds directed edge removal, in/out-degrees,
  forward/backward closures and arc containment,
- [`Dag`] (`Graph<T, Acyclic>`): a [`Digraph`] that additionally offers a topological sort.

Operations shared by all graphs are implemented on `Graph<T, D>` for any `D`, directed
operations on `Graph<T, D>` for `D: Oriented` (so a [`Dag`] offers everything a [`Digraph`]
does).

### Storage
Vertices live in a map keyed by [`VertexId`]; a payload index maps every payload to the id
of its vertex. Ids are minted from a per-instance counter, so removed vertices free their
storage while their ids stay retired. Payload identity is the payload's own `Hash + Eq` contract, so two
distinct payloads never share a vertex even if their hashes collide.
*/

use std::{hash::Hash, marker::PhantomData};

use fxhash::FxHashMap;

use crate::{edge::*, error::*, node::*, ops::*, vertex::Vertex};

mod directed;
mod editing;
mod neighborhood;
mod queries;

pub use neighborhood::*;

/// Graph over payloads of type `T`; see the [module documentation](self)
#[derive(Clone, Debug)]
pub struct Graph<T, D: Direction = Undirected> {
    storage: FxHashMap<VertexId, Vertex<T>>,
    index: FxHashMap<T, VertexId>,
    next_id: Node,
    order: NumNodes,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// The undirected base graph
pub type UnGraph<T> = Graph<T, Undirected>;

/// Directed graph
pub type Digraph<T> = Graph<T, Directed>;

/// Directed graph assumed to be acyclic
pub type Dag<T> = Graph<T, Acyclic>;

/// Anything that identifies a vertex of a `Graph<T, _>`: a payload reference or a [`VertexId`].
pub trait VertexKey<T>: Copy {
    /// Returns the id of the identified vertex if it is part of `graph`
    fn resolve<D: Direction>(self, graph: &Graph<T, D>) -> Option<VertexId>;
}

impl<T: Hash + Eq> VertexKey<T> for &T {
    fn resolve<D: Direction>(self, graph: &Graph<T, D>) -> Option<VertexId> {
        graph.index.get(self).copied()
    }
}

impl<T> VertexKey<T> for VertexId {
    fn resolve<D: Direction>(self, graph: &Graph<T, D>) -> Option<VertexId> {
        graph.contains_id(self).then_some(self)
    }
}

impl<T, D: Direction> Default for Graph<T, D> {
    fn default() -> Self {
        Self {
            storage: FxHashMap::default(),
            index: FxHashMap::default(),
            next_id: 0,
            order: 0,
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<T, D: Direction> Graph<T, D> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `n` vertices
    pub fn with_capacity(n: usize) -> Self {
        Self {
            storage: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            ..Self::default()
        }
    }

    /// Returns the vertex with id `u`, if it is part of the graph
    pub fn vertex(&self, u: VertexId) -> Option<&Vertex<T>> {
        self.storage.get(&u)
    }

    fn vertex_mut(&mut self, u: VertexId) -> Option<&mut Vertex<T>> {
        self.storage.get_mut(&u)
    }

    /// Returns the payload of vertex `u`
    pub fn value_of(&self, u: VertexId) -> Option<&T> {
        self.vertex(u).map(Vertex::value)
    }

    /// Returns an iterator over all payloads (in no particular order)
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage.values().map(Vertex::value)
    }

    /// Maps ids to their payloads, skipping ids that are not part of the graph
    pub(crate) fn payloads<'a, I>(&'a self, ids: I) -> impl Iterator<Item = &'a T> + 'a
    where
        I: IntoIterator<Item = VertexId>,
        I::IntoIter: 'a,
    {
        ids.into_iter().filter_map(move |u| self.value_of(u))
    }

    /// Returns an arbitrary payload
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn any_vertex(&self) -> Result<&T> {
        self.vertices().next().ok_or(GraphError::EmptyGraph)
    }
}

impl<T, D: Direction> GraphType for Graph<T, D> {
    type Dir = D;
}

impl<T, D: Direction> GraphOrder for Graph<T, D> {
    fn order(&self) -> NumNodes {
        self.order
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.storage.keys().copied()
    }

    fn contains_id(&self, u: VertexId) -> bool {
        self.vertex(u).is_some()
    }
}

impl<T, D: Direction> GraphEdgeOrder for Graph<T, D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T, D: Direction> AdjacencyList for Graph<T, D> {
    fn neighbors_of(&self, u: VertexId, adjacency: Adjacency) -> NeighborIter<'_> {
        match self.vertex(u) {
            Some(v) => adjacency.select(v.successors().as_slice(), v.predecessors().as_slice()),
            None => adjacency.select(&[], &[]),
        }
    }

    fn degree_of(&self, u: VertexId, adjacency: Adjacency) -> NumNodes {
        self.vertex(u).map_or(0, |v| match adjacency {
            Adjacency::Both => v.degree(),
            Adjacency::Successors => v.out_degree(),
            Adjacency::Predecessors => v.in_degree(),
        })
    }
}

impl<T: Hash + Eq, D: Direction> Graph<T, D> {
    /// Returns the id of the vertex storing `value`
    pub fn id_of(&self, value: &T) -> Option<VertexId> {
        self.index.get(value).copied()
    }

    /// Returns *true* if the key identifies a vertex of the graph
    pub fn contains_vertex<K: VertexKey<T>>(&self, key: K) -> bool {
        key.resolve(self).is_some()
    }

    pub(crate) fn resolve<K: VertexKey<T>>(&self, key: K) -> Result<VertexId> {
        key.resolve(self).ok_or(GraphError::NoSuchVertex)
    }

    /// Looks up the vertex identified by `key`
    ///
    /// # Errors
    /// [`GraphError::NoSuchVertex`] if the key does not identify a vertex.
    pub fn get_vertex<K: VertexKey<T>>(&self, key: K) -> Result<&Vertex<T>> {
        let u = self.resolve(key)?;
        self.vertex(u).ok_or(GraphError::NoSuchVertex)
    }
}
