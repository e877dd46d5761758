// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge index and ascending edges.
//!
//! The edge index maps every signed crossing id of a knot vector to its cyclic
//! neighbours. It is an integer-keyed arena: the geometric search walks it by
//! looking up ids, so no cyclic pointer structure is ever built.
//!
//! An ascending edge `(from, to)` leaves an under-crossing `from` (negative)
//! toward one of its two neighbours `to`. It represents a rope segment running
//! from an under-crossing up to the next crossing.

use crate::geometry::{Crossing, Knot};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A directed rope segment from an under-crossing to a neighbouring crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AscendingEdge {
    /// The under occurrence (negative id) the segment starts at.
    pub from: Crossing,
    /// The neighbouring crossing the segment reaches.
    pub to: Crossing,
}

impl AscendingEdge {
    pub fn new(from: Crossing, to: Crossing) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for AscendingEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.from, self.to)
    }
}

/// Mapping from signed crossing id to its `(predecessor, successor)` in the
/// cyclic knot vector.
///
/// If an id occurs more than once (only possible for structurally invalid
/// vectors) the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIndex {
    neighbours: BTreeMap<Crossing, (Crossing, Crossing)>,
}

impl EdgeIndex {
    /// Build the index for a knot vector.
    pub fn new(knot: &Knot) -> Self {
        let neighbours = (0..knot.len())
            .map(|position| (knot[position], knot.neighbours(position)))
            .collect();
        Self { neighbours }
    }

    /// Neighbours of a signed crossing id, if it occurs in the vector.
    pub fn get(&self, crossing: Crossing) -> Option<(Crossing, Crossing)> {
        self.neighbours.get(&crossing).copied()
    }

    pub fn contains(&self, crossing: Crossing) -> bool {
        self.neighbours.contains_key(&crossing)
    }

    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Iterate over `(crossing, (predecessor, successor))` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (Crossing, (Crossing, Crossing))> + '_ {
        self.neighbours.iter().map(|(&k, &v)| (k, v))
    }
}

/// Build the edge index of `knot`.
pub fn index_edges(knot: &Knot) -> EdgeIndex {
    EdgeIndex::new(knot)
}

/// All ascending edges: for every under-crossing `k`, the edges `(k, p)` to
/// each of its two neighbours `p`.
pub fn ascending_edges(index: &EdgeIndex) -> BTreeSet<AscendingEdge> {
    index
        .iter()
        .filter(|&(crossing, _)| crossing < 0)
        .flat_map(|(crossing, (pred, succ))| {
            [
                AscendingEdge::new(crossing, pred),
                AscendingEdge::new(crossing, succ),
            ]
        })
        .collect()
}
