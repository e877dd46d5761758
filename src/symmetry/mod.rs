// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry of knot vectors under rotation and reflection.
//!
//! This module provides canonical renumbering of knot vectors and enumeration
//! of their equivalence classes.
//!
//! ## Module Structure
//!
//! - `canonical`: Canonical form, rotations, reflection and canonicality checking
//! - `mod`: Public API and re-exports

pub mod canonical;

// Re-export main types and functions
pub use canonical::{
    all_equivalent, all_rotations, canonicalize, check_symmetry, rotate_reverse, SymmetryType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Knot;

    #[test]
    fn test_class_members_share_class() {
        let knot = Knot::from([1, -2, 3, -1, 2, -4, 4, -3]);
        let class = all_equivalent(&knot);
        for member in &class {
            assert_eq!(&all_equivalent(member), &class, "class of {} differs", member);
        }
    }

    #[test]
    fn test_class_members_are_canonical() {
        let knot = Knot::from([1, -2, 3, -4, 5, -5, 4, -1, 2, -3]);
        for member in all_equivalent(&knot) {
            assert_ne!(check_symmetry(&member), SymmetryType::NonCanonical);
        }
    }
}
