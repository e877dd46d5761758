// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sectors: planar regions bounded by ascending edges.
//!
//! A sector is found by walking ascending edges backwards from a crossing until
//! the walk returns to a crossing it has already visited. The closed part of
//! the walk is the sector boundary. Like facial cycles, sectors are stored in
//! canonical form: rotated to start with their smallest crossing id.
//!
//! # Examples
//!
//! ```
//! use knot_catalog::geometry::{all_sectors, index_edges, Knot, Sector};
//!
//! let index = index_edges(&Knot::from([1, -2, 3, -1, 2, -3]));
//! let sectors = all_sectors(&index);
//!
//! // The trefoil divides the plane into five regions.
//! assert_eq!(sectors.len(), 5);
//! assert!(sectors.contains(&Sector::new(vec![2, 3, 1])));
//! ```

use crate::geometry::{AscendingEdge, Crossing, EdgeIndex};
use std::collections::BTreeSet;
use std::fmt;

/// A partial walk over ascending edges.
///
/// Steps are stored oldest first, so the head (the current frontier crossing)
/// is the last element. Each step is a neighbour of the negation of the step
/// pushed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Crossing>,
}

impl Path {
    /// A walk consisting of a single crossing.
    pub fn start(crossing: Crossing) -> Self {
        Self {
            steps: vec![crossing],
        }
    }

    /// The frontier crossing.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn head(&self) -> Crossing {
        *self.steps.last().expect("path has no head")
    }

    /// A new path extended by one step.
    pub fn extended(&self, crossing: Crossing) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(crossing);
        Self { steps }
    }

}

impl From<Vec<Crossing>> for Path {
    /// Build a path from steps listed head first.
    fn from(mut head_first: Vec<Crossing>) -> Self {
        head_first.reverse();
        Self { steps: head_first }
    }
}

/// A closed walk of ascending edges in canonical rotation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sector(Vec<Crossing>);

impl Sector {
    /// Create a sector from its boundary, rotating it to start with the
    /// smallest crossing id.
    ///
    /// # Panics
    ///
    /// Panics if `boundary` is empty.
    pub fn new(mut boundary: Vec<Crossing>) -> Self {
        let min_pos = boundary
            .iter()
            .enumerate()
            .min_by_key(|&(_, &c)| c)
            .map(|(pos, _)| pos)
            .expect("sector boundary must not be empty");
        boundary.rotate_left(min_pos);
        Self(boundary)
    }

    pub fn crossings(&self) -> &[Crossing] {
        &self.0
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, crossing) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", crossing)?;
        }
        write!(f, ")")
    }
}

/// Extend `path` by one ascending edge in every possible way.
///
/// The continuations are the neighbours of `-head`; there are at most two.
pub fn ascending_step(index: &EdgeIndex, path: &Path) -> Vec<Path> {
    match index.get(-path.head()) {
        Some((pred, succ)) => vec![path.extended(pred), path.extended(succ)],
        None => Vec::new(),
    }
}

/// If the head of `path` already occurs earlier in the walk, return the
/// closed part of the walk as a sector.
///
/// # Panics
///
/// Panics if `path` is empty.
pub fn is_sector(path: &Path) -> Option<Sector> {
    let (&head, earlier) = path
        .steps
        .split_last()
        .expect("sector closure tested on an empty path");
    let closed_at = earlier.iter().rposition(|&c| c == head)?;
    Some(Sector::new(path.steps[closed_at + 1..].iter().rev().copied().collect()))
}

/// Enumerate every sector reachable from crossing 1.
///
/// Open walks are extended until they close. A walk visits distinct crossings
/// until it closes, so walks are bounded by the number of crossing ids and the
/// search terminates.
///
/// Only sectors whose walks start from crossing 1 are found; for a
/// single-component diagram that is all of them.
pub fn all_sectors(index: &EdgeIndex) -> BTreeSet<Sector> {
    let mut sectors = BTreeSet::new();
    if !index.contains(1) {
        return sectors;
    }

    let mut frontier = vec![Path::start(1)];
    while let Some(path) = frontier.pop() {
        match is_sector(&path) {
            Some(sector) => {
                sectors.insert(sector);
            }
            None => frontier.extend(ascending_step(index, &path)),
        }
    }
    sectors
}

/// The ascending edges bounding a sector: `(-b, a)` for each cyclically
/// adjacent pair `(a, b)`.
pub fn sector_ascending_edges(sector: &Sector) -> Vec<AscendingEdge> {
    let crossings = sector.crossings();
    let len = crossings.len();
    (0..len)
        .map(|i| AscendingEdge::new(-crossings[(i + 1) % len], crossings[i]))
        .collect()
}
