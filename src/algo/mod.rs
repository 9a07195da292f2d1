/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`Graph`](crate::repr::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use pgraphs::algo::*;
```
and gain access to traversals, cycle detection, topological orderings and path search.
Algorithms are written against the traits in [`ops`](crate::ops) and, if possible, provided
as **iterators**, making it easy to consume results lazily.
*/

mod cycles;
mod search;
mod topo;
mod traversal;

use crate::prelude::*;

pub use cycles::*;
pub use search::*;
pub use topo::*;
pub use traversal::*;
