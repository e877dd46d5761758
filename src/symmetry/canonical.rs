// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical form and equivalence classes of knot vectors.
//!
//! The same knot diagram can be written starting at any crossing and walked
//! in either direction. Canonical form removes the choice of crossing ids:
//! starting at an over-crossing, ids are reassigned `1, 2, 3, ...` in order of
//! first appearance. The equivalence class of a vector is the set of canonical
//! forms over every admissible starting point and both directions.

use crate::geometry::{Crossing, Knot};
use std::collections::{BTreeSet, HashMap};

/// Result of symmetry checking for a knot vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Vector is in canonical form and its class has all `2n` members.
    Canonical,
    /// Vector is in canonical form and the knot has a nontrivial rotation or
    /// reflection symmetry (its class has fewer than `2n` members).
    Equivocal,
    /// Vector is not in canonical form.
    NonCanonical,
}

/// Renumber crossings into canonical form.
///
/// If the vector starts with an under-crossing it is first rotated to start
/// at its first over-crossing. Crossing ids are then reassigned by order of
/// first appearance, keeping each occurrence's sign.
///
/// # Examples
///
/// ```
/// use knot_catalog::geometry::Knot;
/// use knot_catalog::symmetry::canonicalize;
///
/// let knot = Knot::from([3, -2, 1, -3, 2, -1]);
/// assert_eq!(canonicalize(&knot), Knot::from([1, -2, 3, -1, 2, -3]));
/// ```
///
/// # Panics
///
/// Panics if the vector is nonempty but has no over-crossing.
pub fn canonicalize(knot: &Knot) -> Knot {
    if knot.is_empty() {
        return Knot::unknot();
    }
    let start = knot
        .iter()
        .position(|&c| c > 0)
        .unwrap_or_else(|| panic!("cannot canonicalize {}: no over-crossing", knot));

    let rotated = knot.rotated(start);
    let mut renumbering: HashMap<u32, Crossing> = HashMap::new();
    rotated
        .iter()
        .map(|&c| {
            let next = renumbering.len() as Crossing + 1;
            let id = *renumbering.entry(c.unsigned_abs()).or_insert(next);
            id * c.signum()
        })
        .collect()
}

/// The `n` rotations of a `2n`-vector by even offsets `0, 2, 4, ...`.
///
/// Only even offsets keep an alternating vector starting on an over-crossing.
pub fn all_rotations(knot: &Knot) -> Vec<Knot> {
    (0..knot.len()).step_by(2).map(|shift| knot.rotated(shift)).collect()
}

/// The same rope walked in the opposite direction, realigned to start on the
/// same over-crossing: rotate left by one, then reverse.
pub fn rotate_reverse(knot: &Knot) -> Knot {
    knot.rotated(1).reversed()
}

/// Every canonical vector equivalent to `knot` under rotation and reflection.
///
/// The class has at most `2n` members; symmetric knots have fewer.
pub fn all_equivalent(knot: &Knot) -> BTreeSet<Knot> {
    if knot.is_empty() {
        return BTreeSet::from([Knot::unknot()]);
    }
    all_rotations(knot)
        .into_iter()
        .chain(all_rotations(&rotate_reverse(knot)))
        .map(|rotation| canonicalize(&rotation))
        .collect()
}

/// Classify a vector by canonical form and symmetry.
///
/// The unknot is `Equivocal`.
pub fn check_symmetry(knot: &Knot) -> SymmetryType {
    if canonicalize(knot) != *knot {
        return SymmetryType::NonCanonical;
    }
    if all_equivalent(knot).len() < knot.len() || knot.is_empty() {
        return SymmetryType::Equivocal;
    }
    SymmetryType::Canonical
}
