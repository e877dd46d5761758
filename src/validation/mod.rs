// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validation of knot vectors.
//!
//! Three checks run in order, and the first failure is reported:
//!
//! 1. **Structure**: even length, no zero, ids within `1..=n`, no repeats.
//! 2. **Alternation**: the rope alternates over and under at every step.
//! 3. **Geometry**: every ascending edge borders exactly two sectors, as it
//!    must in a planar diagram.
//!
//! # Examples
//!
//! ```
//! use knot_catalog::geometry::Knot;
//! use knot_catalog::validation::{check_all, FailureKind};
//!
//! assert!(check_all(&Knot::from([1, -2, 3, -1, 2, -3])).is_ok());
//!
//! let failure = check_all(&Knot::from([1, 2, 3])).unwrap_err();
//! assert_eq!(failure.kind(), FailureKind::OddLen);
//! ```

pub mod errors;

pub use errors::{FailureKind, Junction, KnotFailure};

use crate::geometry::{
    all_sectors, ascending_edges, index_edges, sector_ascending_edges, AscendingEdge, EdgeIndex,
    Knot,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Check the vector is a permutation of `{1..n} ∪ {-n..-1}`.
///
/// Reports, in priority order: odd length, a zero, the first id whose
/// magnitude exceeds `n`, the first repeated id.
pub fn check_structure(knot: &Knot) -> Result<(), KnotFailure> {
    let len = knot.len();
    if len % 2 != 0 {
        return Err(KnotFailure::OddLen { len });
    }
    if knot.contains(&0) {
        return Err(KnotFailure::ContainsZero);
    }

    let n = knot.crossing_count();
    if let Some(&value) = knot.iter().find(|c| c.unsigned_abs() as usize > n) {
        return Err(KnotFailure::InvalidNodeNumber { value });
    }

    let mut seen = HashSet::with_capacity(len);
    if let Some(&value) = knot.iter().find(|&&c| !seen.insert(c)) {
        return Err(KnotFailure::Repeated { value });
    }
    Ok(())
}

/// Check that consecutive crossings (cyclically) have opposite signs.
///
/// Same-sign junctions are collected: positive pairs into `above`, negative
/// pairs into `under`.
pub fn check_alternation(knot: &Knot) -> Result<(), KnotFailure> {
    let mut above = BTreeSet::new();
    let mut under = BTreeSet::new();

    for (a, b) in knot.cyclic_pairs() {
        if (a > 0) != (b > 0) {
            continue;
        }
        if a + b > 0 {
            above.insert((a, b));
        } else {
            under.insert((a, b));
        }
    }

    if above.is_empty() && under.is_empty() {
        Ok(())
    } else {
        Err(KnotFailure::Improper { above, under })
    }
}

/// Ascending edges that are not bordered by exactly two sectors.
///
/// An empty result means the diagram is geometrically consistent.
pub fn geometric_violations(index: &EdgeIndex) -> BTreeSet<AscendingEdge> {
    let mut coverage: HashMap<AscendingEdge, usize> = HashMap::new();
    for sector in all_sectors(index) {
        for edge in sector_ascending_edges(&sector) {
            *coverage.entry(edge).or_insert(0) += 1;
        }
    }

    ascending_edges(index)
        .into_iter()
        .filter(|edge| coverage.get(edge).copied().unwrap_or(0) != 2)
        .collect()
}

/// Check every ascending edge borders exactly two sectors.
pub fn check_geometric(index: &EdgeIndex) -> Result<(), KnotFailure> {
    let edges = geometric_violations(index);
    if edges.is_empty() {
        Ok(())
    } else {
        Err(KnotFailure::Geometry { edges })
    }
}

/// Run structure, alternation and geometry checks, reporting the first failure.
pub fn check_all(knot: &Knot) -> Result<(), KnotFailure> {
    check_structure(knot)?;
    check_alternation(knot)?;
    check_geometric(&index_edges(knot))
}
