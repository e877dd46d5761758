// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate knot vectors.
//!
//! Candidates are built one element at a time. At each step only elements
//! that could extend a proper, canonical vector are considered:
//!
//! - the sign is opposite to the previous element (alternation),
//! - the id is at most one more than the largest id used so far (first
//!   appearance order) and at most the target crossing count,
//! - the signed id has not been used yet,
//! - it is not the negation of the previous element (an immediate kink).
//!
//! [`knot_candidate`] picks one element per step with a seeded [`Selector`];
//! [`CandidateTree`] walks every possible choice. Neither guarantees a valid
//! knot: run the result through [`check_all`](crate::validation::check_all).
//!
//! # Examples
//!
//! ```
//! use knot_catalog::generator::knot_candidate;
//! use knot_catalog::geometry::Knot;
//!
//! assert_eq!(knot_candidate(1001, 3), Knot::from([1, -2, 3, -1, 2, -3]));
//! ```

pub mod exhaustive;
pub mod selector;

pub use exhaustive::CandidateTree;
pub use selector::Selector;

use crate::geometry::{Crossing, Knot};

/// Largest crossing count the generators accept.
pub const MAX_CROSSINGS: usize = 1024;

/// Elements that may follow `partial` in a candidate with `target_n` crossings,
/// ordered by ascending absolute value.
pub fn element_candidates(partial: &[Crossing], target_n: usize) -> Vec<Crossing> {
    let Some(&last) = partial.last() else {
        return vec![1];
    };
    let max_used = partial.iter().map(|c| c.unsigned_abs() as usize).max().unwrap_or(0);
    let limit = (max_used + 1).min(target_n) as Crossing;
    let sign = -last.signum();

    (1..=limit)
        .map(|id| id * sign)
        .filter(|&c| c != -last && !partial.contains(&c))
        .collect()
}

/// Build a candidate vector for `target_n` crossings from `seed`.
///
/// Stops early, returning a short vector, if no element can extend it.
///
/// # Panics
///
/// Panics if `target_n` exceeds [`MAX_CROSSINGS`].
pub fn knot_candidate(seed: u64, target_n: usize) -> Knot {
    assert!(
        target_n <= MAX_CROSSINGS,
        "crossing count {} exceeds {}",
        target_n,
        MAX_CROSSINGS
    );
    let mut selector = Selector::new(seed);
    let mut partial: Vec<Crossing> = Vec::new();

    while partial.len() < 2 * target_n {
        let candidates = element_candidates(&partial, target_n);
        if candidates.is_empty() {
            break;
        }
        partial.push(candidates[selector.select(candidates.len())]);
    }
    Knot::new(partial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knot_candidate_at_max_crossings() {
        let candidate = knot_candidate(1, MAX_CROSSINGS);
        assert!(candidate.len() <= 2 * MAX_CROSSINGS);
        assert_eq!(candidate[0], 1);
    }

    #[test]
    #[should_panic(expected = "crossing count 1099511627776 exceeds 1024")]
    fn test_knot_candidate_rejects_huge_crossing_count() {
        knot_candidate(1, 1 << 40);
    }

    #[test]
    fn test_element_candidates_empty_partial() {
        assert_eq!(element_candidates(&[], 3), vec![1]);
        assert_eq!(element_candidates(&[], 0), vec![1]);
    }

    #[test]
    fn test_element_candidates_alternate_sign() {
        assert_eq!(element_candidates(&[1], 3), vec![-2]);
        assert_eq!(element_candidates(&[1, -2], 3), vec![3]);
        assert_eq!(element_candidates(&[1, -2, 3], 3), vec![-1]);
    }

    #[test]
    fn test_element_candidates_limit_by_target() {
        assert_eq!(element_candidates(&[1, -2, 3, -1], 3), vec![2]);
        assert_eq!(element_candidates(&[1, -2, 3, -1], 4), vec![2, 4]);
    }

    #[test]
    fn test_element_candidates_forbid_kink() {
        // -1 is excluded as the negation of 1; -2 is the only new id allowed
        assert_eq!(element_candidates(&[1], 5), vec![-2]);
        assert_eq!(element_candidates(&[1, -2, 3, -1, 2], 3), vec![-3]);
    }

    #[test]
    fn test_element_candidates_exhausted() {
        assert!(element_candidates(&[1, -2, 3, -1, 2, -3], 3).is_empty());
    }

    #[test]
    fn test_knot_candidate_trefoil() {
        assert_eq!(knot_candidate(1001, 3), Knot::from([1, -2, 3, -1, 2, -3]));
    }

    #[test]
    fn test_knot_candidate_depends_on_seed() {
        assert_eq!(
            knot_candidate(1, 5),
            Knot::from([1, -2, 3, -4, 5, -3, 4, -5, 2, -1])
        );
        assert_eq!(
            knot_candidate(7, 5),
            Knot::from([1, -2, 3, -4, 5, -3, 4, -1, 2, -5])
        );
    }

    #[test]
    fn test_knot_candidate_can_stop_short() {
        assert_eq!(
            knot_candidate(0, 5),
            Knot::from([1, -2, 3, -1, 2, -3, 4, -5])
        );
    }

    #[test]
    fn test_knot_candidate_single_crossing() {
        assert_eq!(knot_candidate(3, 1), Knot::from([1]));
    }
}
