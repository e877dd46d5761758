// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Removal of twist crossings.
//!
//! A crossing `c` is a twist when the two arcs of rope between its over and
//! under occurrences share no other crossing. The diagram then falls apart
//! into two tangles joined only at `c`; flipping one tangle over removes `c`.
//!
//! In vector terms, with `s1` the elements strictly between `c` and `-c` and
//! `s2` those strictly between `-c` and `c`, the untwisted knot is
//! `canonicalize(s1 ++ reverse(s2))`, two elements shorter than before.
//!
//! # Examples
//!
//! ```
//! use knot_catalog::geometry::Knot;
//! use knot_catalog::simplify::simplify;
//!
//! let twisted = Knot::from([1, -2, 3, -4, 5, -5, 4, -1, 2, -3]);
//! assert_eq!(simplify(&twisted), Knot::from([1, -2, 3, -1, 2, -3]));
//! ```

use crate::geometry::{Crossing, Knot};
use crate::symmetry::canonicalize;
use std::collections::HashSet;
use tracing::trace;

/// The elements strictly between `from` and `to`, walking forward cyclically
/// from just after `from`.
///
/// # Panics
///
/// Panics if `from` or `to` does not occur in the vector.
pub fn slice(knot: &Knot, from: Crossing, to: Crossing) -> Vec<Crossing> {
    let start = knot
        .iter()
        .position(|&c| c == from)
        .unwrap_or_else(|| panic!("slice endpoint {} not in {}", from, knot));
    assert!(knot.contains(&to), "slice endpoint {} not in {}", to, knot);

    knot.iter()
        .cycle()
        .skip(start + 1)
        .take_while(|&&c| c != to)
        .copied()
        .collect()
}

fn crossing_ids(crossings: &[Crossing]) -> HashSet<u32> {
    crossings.iter().map(|c| c.unsigned_abs()).collect()
}

/// Remove crossing `crossing` if it is a twist.
///
/// Returns `None` if the arcs on either side of the crossing share another
/// crossing.
pub fn try_untwist(knot: &Knot, crossing: Crossing) -> Option<Knot> {
    let outbound = slice(knot, crossing, -crossing);
    let inbound = slice(knot, -crossing, crossing);

    if !crossing_ids(&outbound).is_disjoint(&crossing_ids(&inbound)) {
        return None;
    }

    let flipped: Knot = outbound
        .into_iter()
        .chain(inbound.into_iter().rev())
        .collect();
    Some(canonicalize(&flipped))
}

/// Remove the lowest-numbered twist crossing, if there is one.
pub fn untwist(knot: &Knot) -> Option<Knot> {
    (1..=knot.crossing_count() as Crossing).find_map(|crossing| try_untwist(knot, crossing))
}

/// `knot` followed by each result of untwisting the previous one.
fn untwists(knot: &Knot) -> impl Iterator<Item = Knot> {
    std::iter::successors(Some(knot.clone()), |current| {
        let next = untwist(current);
        if let Some(untwisted) = &next {
            trace!(from = %current, to = %untwisted, "untwisted crossing");
        }
        next
    })
}

/// Every vector produced by repeatedly untwisting `knot`, starting with
/// `knot` itself and ending with its fully simplified form.
pub fn simplification_trace(knot: &Knot) -> Vec<Knot> {
    untwists(knot).collect()
}

/// Untwist until no twist remains.
///
/// Terminates because each untwist shortens the vector by two. If at least
/// one twist was removed the result is canonical.
pub fn simplify(knot: &Knot) -> Knot {
    untwists(knot).last().unwrap_or_else(|| knot.clone())
}
