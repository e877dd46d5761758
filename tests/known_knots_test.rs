// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known knots run through the whole library.

mod common;

use common::*;
use knot_catalog::catalog::{CatalogState, Counter, Outcome};
use knot_catalog::generator::knot_candidate;
use knot_catalog::geometry::{all_sectors, index_edges, AscendingEdge, Knot, Sector};
use knot_catalog::simplify::{simplification_trace, simplify};
use knot_catalog::symmetry::{all_equivalent, canonicalize, check_symmetry, SymmetryType};
use knot_catalog::validation::{
    check_all, check_geometric, check_structure, FailureKind, KnotFailure,
};
use std::collections::BTreeSet;

#[test]
fn test_structure_cases() {
    assert_eq!(check_structure(&Knot::unknot()), Ok(()));
    assert_eq!(check_structure(&knot(&[1, 2, 3])), Err(KnotFailure::OddLen { len: 3 }));
    assert_eq!(check_structure(&knot(&[1, 0])), Err(KnotFailure::ContainsZero));
    assert_eq!(
        check_structure(&knot(&[1, 1])),
        Err(KnotFailure::Repeated { value: 1 })
    );
}

#[test]
fn test_canonicalize_mirror_numbering() {
    assert_eq!(canonicalize(&knot(&[3, -2, 1, -3, 2, -1])), knot(&TREFOIL));
}

#[test]
fn test_trefoil() {
    let trefoil = knot(&TREFOIL);
    assert_eq!(check_all(&trefoil), Ok(()));
    assert_eq!(check_geometric(&index_edges(&trefoil)), Ok(()));
    assert_eq!(simplify(&trefoil), trefoil);
    assert_eq!(all_equivalent(&trefoil), BTreeSet::from([trefoil.clone()]));
    assert_eq!(check_symmetry(&trefoil), SymmetryType::Equivocal);

    let sectors: Vec<String> = all_sectors(&index_edges(&trefoil))
        .iter()
        .map(Sector::to_string)
        .collect();
    assert_eq!(sectors, vec!["(1 2)", "(1 2 3)", "(1 3)", "(1 3 2)", "(2 3)"]);
}

#[test]
fn test_cinquefoil() {
    let cinquefoil = knot(&CINQUEFOIL);
    assert_eq!(check_all(&cinquefoil), Ok(()));
    assert_eq!(simplify(&cinquefoil), cinquefoil);
    assert_eq!(all_equivalent(&cinquefoil).len(), 1);
}

#[test]
fn test_non_planar_geometry_failure() {
    let expected: BTreeSet<AscendingEdge> = [
        (-5, 1),
        (-5, 2),
        (-4, 3),
        (-4, 5),
        (-3, 4),
        (-3, 5),
        (-2, 1),
        (-2, 3),
        (-1, 2),
        (-1, 4),
    ]
    .into_iter()
    .map(|(from, to)| AscendingEdge::new(from, to))
    .collect();

    let non_planar = knot(&NON_PLANAR);
    assert_eq!(check_structure(&non_planar), Ok(()));
    assert_eq!(
        check_all(&non_planar),
        Err(KnotFailure::Geometry { edges: expected })
    );
}

#[test]
fn test_twisted_trefoil_simplifies() {
    let twisted = knot(&TWISTED_TREFOIL);
    assert_eq!(simplify(&twisted), knot(&TREFOIL));
    assert_eq!(
        simplification_trace(&twisted),
        vec![twisted, knot(&ONCE_TWISTED_TREFOIL), knot(&TREFOIL)]
    );
}

#[test]
fn test_once_twisted_trefoil_class() {
    let once = knot(&ONCE_TWISTED_TREFOIL);
    let class = all_equivalent(&once);
    assert_eq!(class.len(), 8);
    assert!(class.contains(&knot(&[1, -2, 3, -3, 4, -1, 2, -4])));
    assert!(class.iter().all(|member| simplify(member) == knot(&TREFOIL)));
}

#[test]
fn test_seed_1001_draws_trefoil() {
    assert_eq!(knot_candidate(1001, 3), knot(&TREFOIL));
}

#[test]
fn test_duplicate_candidate_only_touches_stats() {
    let (state, outcome) = CatalogState::new().consider(&knot(&TREFOIL));
    assert_eq!(outcome, Outcome::Added(knot(&TREFOIL)));

    let before = state.clone();
    let (state, outcome) = state.consider(&knot(&[-1, 2, -3, 1, -2, 3]));
    assert_eq!(outcome, Outcome::Duplicate { of: knot(&TREFOIL) });
    assert_eq!(state.stats().get(Counter::Duplicate), 1);
    assert_eq!(state.catalog(), before.catalog());
    assert_eq!(state.index(), before.index());
}

#[test]
fn test_rejection_tags() {
    let cases: [(&[i32], FailureKind); 6] = [
        (&[1, 2, 3], FailureKind::OddLen),
        (&[1, 0], FailureKind::ContainsZero),
        (&[1, -3], FailureKind::InvalidNodeNumber),
        (&[1, 1], FailureKind::Repeated),
        (&[1, 2, -1, -2], FailureKind::Improper),
        (&NON_PLANAR, FailureKind::Geometry),
    ];
    for (crossings, kind) in cases {
        let (state, outcome) = CatalogState::new().consider(&knot(crossings));
        assert_eq!(outcome, Outcome::Rejected(kind), "{:?}", crossings);
        assert_eq!(state.stats().get(Counter::Rejected(kind)), 1);
        assert!(state.catalog().is_empty());
    }
}
