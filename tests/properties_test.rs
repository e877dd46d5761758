// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over generated knot vectors.

use knot_catalog::generator::{knot_candidate, Selector};
use knot_catalog::geometry::{Crossing, Knot};
use knot_catalog::simplify::simplify;
use knot_catalog::symmetry::{all_equivalent, canonicalize, check_symmetry, SymmetryType};
use knot_catalog::validation::{check_alternation, check_structure};
use proptest::prelude::*;

/// Nonzero vectors with at least one over-crossing.
fn any_vector() -> impl Strategy<Value = Knot> {
    prop::collection::vec((-9i32..=9).prop_filter("nonzero", |c| *c != 0), 1..14)
        .prop_filter("has an over-crossing", |v| v.iter().any(|&c| c > 0))
        .prop_map(Knot::new)
}

/// Structurally valid alternating vectors: over and under ids each in a
/// random order, interleaved.
fn proper_knot() -> impl Strategy<Value = Knot> {
    (1usize..=6)
        .prop_flat_map(|n| {
            let ids: Vec<Crossing> = (1..=n as Crossing).collect();
            (Just(ids.clone()).prop_shuffle(), Just(ids).prop_shuffle())
        })
        .prop_map(|(over, under)| {
            over.into_iter()
                .zip(under)
                .flat_map(|(o, u)| [o, -u])
                .collect::<Knot>()
        })
}

proptest! {
    #[test]
    fn prop_canonicalize_idempotent(knot in any_vector()) {
        let canonical = canonicalize(&knot);
        prop_assert!(canonical[0] > 0);
        prop_assert_eq!(canonicalize(&canonical), canonical.clone());
        prop_assert_eq!(canonical.len(), knot.len());
    }

    #[test]
    fn prop_proper_knot_generator(knot in proper_knot()) {
        prop_assert_eq!(check_structure(&knot), Ok(()));
        prop_assert_eq!(check_alternation(&knot), Ok(()));
    }

    #[test]
    fn prop_canonical_form_in_class(knot in proper_knot()) {
        let canonical = canonicalize(&knot);
        let class = all_equivalent(&knot);
        prop_assert!(class.contains(&canonical));
        prop_assert_eq!(&all_equivalent(&canonical), &class);
        prop_assert!(class.len() <= knot.len());
        for member in &class {
            prop_assert_ne!(check_symmetry(member), SymmetryType::NonCanonical);
        }
    }

    #[test]
    fn prop_simplify_fixpoint(knot in proper_knot()) {
        let simplified = simplify(&knot);
        prop_assert_eq!(simplify(&simplified), simplified.clone());
        prop_assert!(simplified.len() <= knot.len());
        prop_assert_eq!(simplified.len() % 2, 0);
    }

    #[test]
    fn prop_selector_digit_in_bound(seed in any::<u64>(), bounds in prop::collection::vec(1usize..8, 1..40)) {
        let mut selector = Selector::new(seed);
        for bound in bounds {
            prop_assert!(selector.select(bound) < bound);
        }
    }

    #[test]
    fn prop_candidate_shape(seed in any::<u64>(), n in 1usize..=7) {
        let candidate = knot_candidate(seed, n);
        prop_assert!(candidate.len() <= 2 * n);
        prop_assert_eq!(candidate[0], 1);
        for pair in candidate.windows(2) {
            prop_assert!(pair[0].signum() != pair[1].signum());
            prop_assert!(pair[0] != -pair[1]);
        }
        prop_assert_eq!(knot_candidate(seed, n), candidate);
    }
}
