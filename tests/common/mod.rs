// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use knot_catalog::geometry::Knot;
use knot_catalog::survey::{SeedRange, SurveyConfig};

/// The trefoil, the only three-crossing knot.
pub const TREFOIL: [i32; 6] = [1, -2, 3, -1, 2, -3];

/// The (5,2) torus knot.
pub const CINQUEFOIL: [i32; 10] = [1, -2, 3, -4, 5, -1, 2, -3, 4, -5];

/// Structurally proper and alternating, but not drawable in the plane.
pub const NON_PLANAR: [i32; 10] = [1, -2, 3, -4, 5, -3, 4, -1, 2, -5];

/// A trefoil with two trivial twists added.
pub const TWISTED_TREFOIL: [i32; 10] = [1, -2, 3, -4, 5, -5, 4, -1, 2, -3];

/// The twisted trefoil with one twist removed.
pub const ONCE_TWISTED_TREFOIL: [i32; 8] = [1, -2, 3, -1, 2, -4, 4, -3];

pub fn knot(crossings: &[i32]) -> Knot {
    Knot::from(crossings)
}

/// A serial seeded survey over `start..end`.
pub fn seeded(crossings: usize, start: u64, end: u64) -> SurveyConfig {
    SurveyConfig {
        crossings,
        parallel: false,
        seeds: SeedRange::new(start, end),
        ..SurveyConfig::default()
    }
}

/// A serial exhaustive survey.
pub fn exhaustive(crossings: usize) -> SurveyConfig {
    SurveyConfig {
        crossings,
        exhaustive: true,
        parallel: false,
        ..SurveyConfig::default()
    }
}
