/*!
# Vertex Identity

Every vertex of a graph gets a [`VertexId`] when it is inserted. Algorithms work on ids only,
so lookups by id never hash the payload.

Ids are handed out in insertion order and are **never reused** within one graph instance:
removing a vertex retires its id, and re-inserting the same payload afterwards produces a
fresh vertex with a new id.
*/

use std::fmt::{Debug, Display};

use fxhash::{FxHashMap, FxHashSet};

/// Raw vertex id. We choose `u32` as graphs with more than `2^32 - 1` vertices are out of scope.
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// Identity key of a vertex inside one graph instance
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexId(Node);

impl VertexId {
    pub(crate) const fn new(raw: Node) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer
    pub const fn raw(self) -> Node {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Set of vertex ids used for visited-states during traversals
pub type VertexSet = FxHashSet<VertexId>;

/// Map keyed by vertex ids
pub type VertexMap<V> = FxHashMap<VertexId, V>;
