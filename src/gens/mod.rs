/*!
# Graph Generators

Deterministic generators that add common motifs to an existing graph. Vertices that are
not part of the graph yet are inserted on the fly, so the generators double as builders:

```rust
use pgraphs::{prelude::*, gens::*};

let mut graph = UnGraph::new();
graph.connect_cycle(["a", "b", "c"]);

assert_eq!(graph.order(), 3);
assert!(graph.is_regular().unwrap());
```
*/

use crate::prelude::*;

mod substructures;

pub use substructures::*;
