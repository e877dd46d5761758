// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot vectors.
//!
//! A knot with `n` crossings is encoded as a sequence of `2n` nonzero integers.
//! Each crossing `c` in `1..=n` appears twice: once as `+c` where the rope passes
//! over, once as `-c` where it passes under. The sequence is read cyclically,
//! so the last element is followed by the first.
//!
//! # Examples
//!
//! ```
//! use knot_catalog::geometry::Knot;
//!
//! let trefoil: Knot = "1,-2,3,-1,2,-3".parse().unwrap();
//! assert_eq!(trefoil.crossing_count(), 3);
//! assert_eq!(format!("{}", trefoil), "[1, -2, 3, -1, 2, -3]");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// A signed crossing id: positive for over, negative for under.
pub type Crossing = i32;

/// An immutable knot vector.
///
/// Every transformation (rotation, reversal, canonicalization, untwisting)
/// produces a new `Knot`. The empty vector is the unknot.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Knot(Vec<Crossing>);

impl Knot {
    /// Create a knot from its crossing sequence. No validation is performed.
    pub fn new(crossings: Vec<Crossing>) -> Self {
        Self(crossings)
    }

    /// The unknot (no crossings).
    pub fn unknot() -> Self {
        Self(Vec::new())
    }

    /// Number of crossings, i.e. half the vector length.
    pub fn crossing_count(&self) -> usize {
        self.0.len() / 2
    }

    pub fn as_slice(&self) -> &[Crossing] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Crossing> {
        self.0
    }

    /// Rotate left by `shift` positions, cyclically.
    ///
    /// `rotated(1)` of `[a, b, c]` is `[b, c, a]`.
    pub fn rotated(&self, shift: usize) -> Self {
        if self.0.is_empty() {
            return self.clone();
        }
        let mut crossings = self.0.clone();
        crossings.rotate_left(shift % self.0.len());
        Self(crossings)
    }

    /// The same sequence in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// The cyclic `(predecessor, successor)` of the element at `position`.
    pub fn neighbours(&self, position: usize) -> (Crossing, Crossing) {
        let len = self.0.len();
        (self.0[(position + len - 1) % len], self.0[(position + 1) % len])
    }

    /// Iterate over cyclically consecutive pairs, including the wraparound
    /// pair `(last, first)`.
    pub fn cyclic_pairs(&self) -> impl Iterator<Item = (Crossing, Crossing)> + '_ {
        let len = self.0.len();
        (0..len).map(move |i| (self.0[i], self.0[(i + 1) % len]))
    }
}

impl Deref for Knot {
    type Target = [Crossing];

    fn deref(&self) -> &[Crossing] {
        &self.0
    }
}

impl From<Vec<Crossing>> for Knot {
    fn from(crossings: Vec<Crossing>) -> Self {
        Self(crossings)
    }
}

impl From<&[Crossing]> for Knot {
    fn from(crossings: &[Crossing]) -> Self {
        Self(crossings.to_vec())
    }
}

impl<const N: usize> From<[Crossing; N]> for Knot {
    fn from(crossings: [Crossing; N]) -> Self {
        Self(crossings.to_vec())
    }
}

impl FromIterator<Crossing> for Knot {
    fn from_iter<I: IntoIterator<Item = Crossing>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, crossing) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", crossing)?;
        }
        write!(f, "]")
    }
}

/// Failure to parse a knot literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKnotError {
    #[error("invalid crossing {token:?}: {reason}")]
    InvalidCrossing { token: String, reason: String },
}

impl FromStr for Knot {
    type Err = ParseKnotError;

    /// Parse `1,-2,3`, `[1, -2, 3]` or `1 -2 3`. An empty literal is the unknot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        body.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<Crossing>()
                    .map_err(|e| ParseKnotError::InvalidCrossing {
                        token: token.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}
