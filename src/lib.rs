/*!
`pgraphs` is a graph data structure & algorithms library for graphs whose vertices carry a
**p**ayload: every vertex stores exactly one value, and values identify their vertex.

# Representation

Payloads of type `T` are identified by their own `Hash + Eq` contract. A graph never holds
two vertices for equal payloads. Internally every vertex also gets a [`VertexId`] (a `u32`
drawn from a per-graph counter), which all algorithms work with. Ids are never reused within
a graph: removing a vertex frees its storage and retires its id.

For **edges**, we use a simple tuple-struct `Edge(VertexId, VertexId)` of origin and destination.
Each vertex keeps its *successors* (targets of outgoing edges) and *predecessors* (origins of
incoming edges).

### Directed vs Undirected

There is a single storage type [`Graph<T, D>`](Graph), tagged with a direction marker:

- [`UnGraph`] is the **undirected** base graph. Edges are stored in the role they were
  inserted with, but queries such as [`Graph::transitive_closure`] ignore orientation and
  [`Graph::remove_edge`] accepts both orientations.
- [`Digraph`] is a **directed** graph with in/out-degrees, forward/backward closures and
  arc containment.
- [`Dag`] is a [`Digraph`] that is assumed to be acyclic and offers a topological sort.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
either the *Builder* / *Setter* pattern before calling the configured algorithm on a graph.
Alternatively, the commonly used functionalities are implemented via traits on the graph
itself, making them usable without configuring the algorithm beforehand.

Queries with a key that does not identify a vertex return [`GraphError::NoSuchVertex`];
duplicate insertions are reported by `bool` results.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and the graph types,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as DFS
  (`graph.dfs(start, Adjacency::Both)`), cycle detection, topological orderings and path search,
- [`gens`] includes deterministic substructures such as paths/cycles/cliques.

In most use-cases, `use pgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use pgraphs::prelude::*;

let mut graph: Digraph<&str> = Graph::from_edges([("a", "b"), ("b", "c")]);
graph.add_vertex("d");

assert_eq!(graph.order(), 4);
assert_eq!(graph.out_degree(&"a"), Ok(1));
assert_eq!(graph.is_connected(), Ok(false));
assert_eq!(pgraphs::find_path(&graph, &"c", &"a"), Ok(Some(&"a")));
```

# Logging

Structural mutations and traversal steps are reported via [`tracing`] at `trace` level,
detected cycles at `debug` level. The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

pub use algo::find_path;
pub use error::{GraphError, Result};
pub use node::VertexId;
pub use repr::{Dag, Digraph, Graph, UnGraph};

/// `pgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as the graph types.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, vertex::*};
}
