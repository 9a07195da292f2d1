use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use crate::node::{NumNodes, VertexId};

/// Number of neighbors stored inline before spilling to the heap
const INLINE_NEIGHBORS: usize = 4;

/// Neighborhood of a vertex in one direction.
///
/// Neighbors are kept in insertion order using an inline small vector, as most vertices in
/// practice have only a handful of neighbors. Insertion is idempotent: a neighbor is never
/// listed twice.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood(SmallVec<[VertexId; INLINE_NEIGHBORS]>);

impl Neighborhood {
    /// Creates an empty neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns *true* if there are no neighbors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all neighbors in insertion order
    pub fn neighbors(&self) -> Copied<Iter<'_, VertexId>> {
        self.0.iter().copied()
    }

    /// Returns the neighbors as a slice
    pub fn as_slice(&self) -> &[VertexId] {
        self.0.as_slice()
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// Adds `v` to the Neighborhood.
    /// Returns *true* if `v` was not a neighbor before.
    pub fn try_add_neighbor(&mut self, v: VertexId) -> bool {
        if self.has_neighbor(v) {
            false
        } else {
            self.0.push(v);
            true
        }
    }

    /// Removes `v` from the Neighborhood.
    /// Returns *true* if `v` was a neighbor before.
    pub fn try_remove_neighbor(&mut self, v: VertexId) -> bool {
        match self.0.iter().position(|&u| u == v) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn idempotent_insertion() {
        let mut nbs = Neighborhood::new();
        let (a, b) = (VertexId::new(0), VertexId::new(1));

        assert!(nbs.try_add_neighbor(a));
        assert!(!nbs.try_add_neighbor(a));
        assert!(nbs.try_add_neighbor(b));
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.neighbors().collect_vec(), vec![a, b]);
    }

    #[test]
    fn removal_keeps_order() {
        let mut nbs = Neighborhood::new();
        let ids = (0..8).map(VertexId::new).collect_vec();
        for &id in &ids {
            nbs.try_add_neighbor(id);
        }

        assert!(nbs.try_remove_neighbor(ids[3]));
        assert!(!nbs.try_remove_neighbor(ids[3]));
        assert!(!nbs.has_neighbor(ids[3]));
        assert_eq!(
            nbs.as_slice(),
            &[ids[0], ids[1], ids[2], ids[4], ids[5], ids[6], ids[7]]
        );

        assert!(nbs.try_remove_neighbor(ids[0]));
        assert_eq!(nbs.num_of_neighbors(), 6);
        assert!(!nbs.is_empty());
    }
}
