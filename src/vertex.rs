/*!
# Vertex

A [`Vertex`] wraps exactly one payload value together with its [`VertexId`] and keeps track
of its adjacency in both directions:
- **successors**: targets of outgoing edges,
- **predecessors**: origins of incoming edges.

Neighbors are stored by id. The owning graph resolves ids to vertices, so a vertex never
holds a reference to another vertex.
*/

use std::hash::{Hash, Hasher};

use crate::{
    node::{NumNodes, VertexId},
    repr::Neighborhood,
};

/// A node holding one payload value plus its adjacency
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    value: T,
    id: VertexId,
    successors: Neighborhood,
    predecessors: Neighborhood,
}

impl<T> Vertex<T> {
    /// Creates an unlinked vertex
    pub fn new(id: VertexId, value: T) -> Self {
        Self {
            value,
            id,
            successors: Neighborhood::new(),
            predecessors: Neighborhood::new(),
        }
    }

    /// Returns the payload
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the identity key
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Links `v` as successor. Returns *false* if it already was one.
    pub fn add_successor(&mut self, v: VertexId) -> bool {
        self.successors.try_add_neighbor(v)
    }

    /// Links `v` as predecessor. Returns *false* if it already was one.
    pub fn add_predecessor(&mut self, v: VertexId) -> bool {
        self.predecessors.try_add_neighbor(v)
    }

    /// Unlinks successor `v`. Returns *false* if it was not linked.
    pub fn remove_successor(&mut self, v: VertexId) -> bool {
        self.successors.try_remove_neighbor(v)
    }

    /// Unlinks predecessor `v`. Returns *false* if it was not linked.
    pub fn remove_predecessor(&mut self, v: VertexId) -> bool {
        self.predecessors.try_remove_neighbor(v)
    }

    /// Returns *true* if `v` is a successor
    pub fn has_successor(&self, v: VertexId) -> bool {
        self.successors.has_neighbor(v)
    }

    /// Returns *true* if `v` is a predecessor
    pub fn has_predecessor(&self, v: VertexId) -> bool {
        self.predecessors.has_neighbor(v)
    }

    /// Targets of outgoing edges
    pub fn successors(&self) -> &Neighborhood {
        &self.successors
    }

    /// Origins of incoming edges
    pub fn predecessors(&self) -> &Neighborhood {
        &self.predecessors
    }

    /// Returns successors followed by predecessors.
    ///
    /// A neighbor that is linked in both directions shows up twice.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.successors
            .neighbors()
            .chain(self.predecessors.neighbors())
    }

    /// Number of successors
    pub fn out_degree(&self) -> NumNodes {
        self.successors.num_of_neighbors()
    }

    /// Number of predecessors
    pub fn in_degree(&self) -> NumNodes {
        self.predecessors.num_of_neighbors()
    }

    /// Number of predecessors plus number of successors
    pub fn degree(&self) -> NumNodes {
        self.in_degree() + self.out_degree()
    }

    /// Drops all adjacency and returns the former successors and predecessors
    pub(crate) fn take_adjacency(&mut self) -> (Neighborhood, Neighborhood) {
        (
            std::mem::take(&mut self.successors),
            std::mem::take(&mut self.predecessors),
        )
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn linking_is_idempotent() {
        let (a, b) = (VertexId::new(0), VertexId::new(1));
        let mut v = Vertex::new(a, "a");

        assert!(v.add_successor(b));
        assert!(!v.add_successor(b));
        assert!(v.add_predecessor(b));
        assert!(!v.add_predecessor(b));

        assert_eq!(v.out_degree(), 1);
        assert_eq!(v.in_degree(), 1);
        assert_eq!(v.degree(), 2);
        assert_eq!(v.adjacent().collect_vec(), vec![b, b]);
    }

    #[test]
    fn unlinking() {
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        let mut v = Vertex::new(a, 'a');
        v.add_successor(b);
        v.add_predecessor(c);

        assert!(!v.remove_successor(c));
        assert!(v.remove_successor(b));
        assert!(!v.remove_successor(b));
        assert!(v.remove_predecessor(c));
        assert_eq!(v.degree(), 0);
    }

    #[test]
    fn self_loops_are_allowed() {
        let a = VertexId::new(0);
        let mut v = Vertex::new(a, 0u8);
        assert!(v.add_successor(a));
        assert!(v.add_predecessor(a));
        assert!(v.has_successor(a) && v.has_predecessor(a));
    }

    #[test]
    fn equality_is_by_id() {
        let a = Vertex::new(VertexId::new(0), "x");
        let b = Vertex::new(VertexId::new(0), "y");
        let c = Vertex::new(VertexId::new(1), "x");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
