use itertools::Itertools;
use tracing::debug;

use super::*;

/// Cycle detection that ignores edge orientation
pub trait Cycles: AdjacencyList {
    /// Returns *true* if a cycle is reachable from `start` when every edge is treated as
    /// undirected.
    ///
    /// The edge a vertex was discovered by is never followed back, even if it is stored in
    /// both directions. A self-loop is a cycle.
    fn has_cycle_from(&self, start: VertexId) -> bool {
        let mut visited = VertexSet::default();
        visited.insert(start);
        let mut stack: Vec<(VertexId, Option<VertexId>)> = vec![(start, None)];

        while let Some((u, parent)) = stack.pop() {
            for v in self.neighbors_of(u, Adjacency::Both).unique() {
                if Some(v) == parent {
                    continue;
                }

                if !visited.insert(v) {
                    debug!(from = %u, to = %v, "cycle detected");
                    return true;
                }

                stack.push((v, Some(u)));
            }
        }

        false
    }
}

impl<G> Cycles for G where G: AdjacencyList {}
