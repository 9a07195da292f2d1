/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A depth-first traversal iterator (with and without predecessor tracking) driven by an
  explicit stack, so deep graphs never exhaust the call stack.
- Kahn's algorithm as an iterator ([`TopoSearch`]), used as an acyclicity test.
- A high-level [`Traversal`] trait that exposes these traversals directly as methods on
  graph data structures.

Every traversal follows the neighbors selected by an [`Adjacency`]: successors, predecessors
or both regardless of orientation.
*/

use tracing::trace;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **vertex currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: VertexId, item: VertexId) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: VertexId) -> Self;

    /// Returns the vertex represented by this item.
    fn item(&self) -> VertexId;

    /// Returns the predecessor of this vertex, if any.
    fn predecessor(&self) -> Option<VertexId>;
}

impl SequencedItem for VertexId {
    fn new_with_predecessor(_: VertexId, item: VertexId) -> Self {
        item
    }
    fn new_without_predecessor(item: VertexId) -> Self {
        item
    }
    fn item(&self) -> VertexId {
        *self
    }
    fn predecessor(&self) -> Option<VertexId> {
        None
    }
}

/// Compact representation of `(predecessor, vertex)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same vertex.
pub type PredecessorOfVertex = (VertexId, VertexId);

impl SequencedItem for PredecessorOfVertex {
    fn new_with_predecessor(predecessor: VertexId, item: VertexId) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: VertexId) -> Self {
        (item, item)
    }
    fn item(&self) -> VertexId {
        self.1
    }
    fn predecessor(&self) -> Option<VertexId> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Depth-first traversal iterator.
///
/// Maintains an explicit stack of vertices to visit and a set of discovered vertices. A
/// vertex is marked as discovered when it is pushed, so every vertex is yielded at most once.
pub struct TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    adjacency: Adjacency,
    visited: VertexSet,
    stack: Vec<I>,
    stop_at: Option<VertexId>,
}

/// A DFS traversal iterator yielding vertices.
pub type Dfs<'a, G> = TraversalSearch<'a, G, VertexId>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DfsWithPredecessor<'a, G> = TraversalSearch<'a, G, PredecessorOfVertex>;

impl<G, I> Iterator for TraversalSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.stack.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            self.stack.clear();
        } else {
            for v in self.graph.neighbors_of(u, self.adjacency) {
                if self.visited.insert(v) {
                    trace!(from = %u, to = %v, "dfs step");
                    self.stack.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }
}

impl<'a, G, I> TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// - `graph`: The graph to traverse.
    /// - `start`: The starting vertex.
    /// - `adjacency`: The neighbors followed from each vertex.
    pub fn new(graph: &'a G, start: VertexId, adjacency: Adjacency) -> Self {
        let mut visited = VertexSet::default();
        visited.insert(start);
        Self {
            graph,
            adjacency,
            visited,
            stack: vec![I::new_without_predecessor(start)],
            stop_at: None,
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: VertexId) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: VertexId) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that vertex will be taken. If the vertex was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: VertexId) {
        self.visited.insert(u);
    }

    /// Exclude multiple vertices from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = VertexId>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_nodes`]
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = VertexId>,
    {
        self.exclude_nodes(us);
        self
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all vertices of in-degree 0.
/// - Repeatedly removes a vertex, decreasing in-degrees of its successors,
///   and pushes new vertices of in-degree 0.
/// - Stops once all vertices are output or a cycle blocks further progress.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: VertexMap<NumNodes>,
    stack: Vec<VertexId>,
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = VertexId;

    /// Returns the next vertex in topological order, if available.
    ///
    /// - Each returned vertex is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration will terminate early without
    ///   covering all vertices.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u, Adjacency::Successors) {
            if let Some(deg) = self.in_degs.get_mut(&v) {
                *deg -= 1;
                if *deg == 0 {
                    self.stack.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.order() as usize))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs: VertexMap<NumNodes> = graph
            .vertex_ids()
            .map(|u| (u, graph.degree_of(u, Adjacency::Predecessors)))
            .collect();

        let stack = in_degs
            .iter()
            .filter_map(|(&u, &d)| (d == 0).then_some(u))
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

/// Provides convenient traversal methods (DFS with and without predecessors, topological order)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use pgraphs::{prelude::*, algo::*};
    ///
    /// let graph: Digraph<u32> = Graph::from_edges([(0, 1), (1, 2)]);
    /// let start = graph.id_of(&1).unwrap();
    ///
    /// assert_eq!(graph.dfs(start, Adjacency::Successors).count(), 2);
    /// assert_eq!(graph.dfs(start, Adjacency::Both).count(), 3);
    /// ```
    fn dfs(&self, start: VertexId, adjacency: Adjacency) -> Dfs<'_, Self> {
        Dfs::new(self, start, adjacency)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(
        &self,
        start: VertexId,
        adjacency: Adjacency,
    ) -> DfsWithPredecessor<'_, Self> {
        DfsWithPredecessor::new(self, start, adjacency)
    }

    /// Returns an iterator yielding vertices in a valid **topological order**.
    ///
    /// - Only available for directed graphs.
    /// - Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: GraphType<Dir: Oriented>,
    {
        TopoSearch::new(self)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
