/*!
# Graph Operations

Traits describing what algorithms need to know about a graph. All algorithms in
[`algo`](crate::algo) are written against these traits and implemented once for every
[`Graph`](crate::repr::Graph).
*/

use std::{
    iter::{Chain, Copied},
    slice::Iter,
};

use crate::{edge::*, error::*, node::*};

/// Marker for the orientation semantics of a graph
pub trait Direction: Clone + Copy + Default + std::fmt::Debug + 'static {
    /// *true* if edges carry a direction (origin -> destination)
    const DIRECTED: bool;
}

/// Marker for directed graphs (`Directed` and `Acyclic`)
pub trait Oriented: Direction {}

/// Undirected graphs: edges are stored in the role they were inserted with, but removal
/// accepts either orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Directed graphs that are assumed to be acyclic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acyclic;

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Acyclic {
    const DIRECTED: bool = true;
}

impl Oriented for Directed {}
impl Oriented for Acyclic {}

/// Associates a graph with its orientation
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if the graph is directed
    fn is_directed(&self) -> bool {
        <Self::Dir as Direction>::DIRECTED
    }
}

/// Which stored neighbors a traversal follows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Successors followed by predecessors, ignoring orientation
    #[default]
    Both,
    /// Outgoing edges only
    Successors,
    /// Incoming edges only
    Predecessors,
}

/// Iterator over the neighbors of a vertex as selected by an [`Adjacency`]
pub type NeighborIter<'a> = Copied<Chain<Iter<'a, VertexId>, Iter<'a, VertexId>>>;

impl Adjacency {
    /// Selects the neighbors to follow from the two stored neighborhoods
    pub fn select<'a>(
        self,
        successors: &'a [VertexId],
        predecessors: &'a [VertexId],
    ) -> NeighborIter<'a> {
        const NONE: &[VertexId] = &[];

        let (first, second) = match self {
            Adjacency::Both => (successors, predecessors),
            Adjacency::Successors => (successors, NONE),
            Adjacency::Predecessors => (predecessors, NONE),
        };
        first.iter().chain(second.iter()).copied()
    }
}

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn order(&self) -> NumNodes;

    /// Returns an iterator over the ids of all vertices
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Returns *true* if `u` is a live vertex of the graph
    fn contains_id(&self, u: VertexId) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns the id of an arbitrary vertex
    fn any_vertex_id(&self) -> Result<VertexId> {
        self.vertex_ids().next().ok_or(GraphError::EmptyGraph)
    }
}

/// Provides getters pertaining to the edge set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored edges
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphOrder + Sized {
    /// Returns an iterator over the neighbors of `u` selected by `adjacency`.
    /// Yields nothing if `u` is not a vertex.
    fn neighbors_of(&self, u: VertexId, adjacency: Adjacency) -> NeighborIter<'_>;

    /// Returns the number of neighbors of `u` selected by `adjacency`
    fn degree_of(&self, u: VertexId, adjacency: Adjacency) -> NumNodes {
        self.neighbors_of(u, adjacency).count() as NumNodes
    }

    /// Returns an iterator over all stored edges `(origin, destination)`
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertex_ids().flat_map(move |u| {
            self.neighbors_of(u, Adjacency::Successors)
                .map(move |v| Edge(u, v))
        })
    }

    /// Returns an iterator over all vertices without incoming edges
    fn source_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_ids()
            .filter(move |&u| self.degree_of(u, Adjacency::Predecessors) == 0)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn adjacency_selection() {
        let ids = (0..4).map(VertexId::new).collect_vec();
        let (succ, pred) = (&ids[..2], &ids[2..]);

        assert_eq!(Adjacency::Both.select(succ, pred).collect_vec(), ids);
        assert_eq!(
            Adjacency::Successors.select(succ, pred).collect_vec(),
            succ.to_vec()
        );
        assert_eq!(
            Adjacency::Predecessors.select(succ, pred).collect_vec(),
            pred.to_vec()
        );
    }
}
