// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Failure reports for knot validation.
//!
//! Invalid knots are ordinary data, not faults: every check returns
//! `Result<(), KnotFailure>` and callers match on the variant, or on its
//! [`FailureKind`] tag when only the reason matters (e.g. for statistics).

use crate::geometry::{AscendingEdge, Crossing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// A pair of consecutive crossings with the same sign.
pub type Junction = (Crossing, Crossing);

/// Reasons a knot vector is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnotFailure {
    /// Vector length is odd, so crossings cannot pair up.
    #[error("vector has odd length {len}")]
    OddLen { len: usize },

    /// Vector contains a zero, which is neither over nor under.
    #[error("vector contains zero")]
    ContainsZero,

    /// A crossing id exceeds the crossing count `len / 2`.
    #[error("crossing {value} is out of range")]
    InvalidNodeNumber { value: Crossing },

    /// A signed crossing id occurs more than once.
    #[error("crossing {value} is repeated")]
    Repeated { value: Crossing },

    /// The rope does not alternate over and under.
    ///
    /// `above` holds consecutive over-over junctions, `under` holds
    /// consecutive under-under junctions.
    #[error(
        "knot is not alternating ({} over-over, {} under-under junctions)",
        .above.len(),
        .under.len()
    )]
    Improper {
        above: BTreeSet<Junction>,
        under: BTreeSet<Junction>,
    },

    /// Some ascending edges are not bordered by exactly two sectors.
    #[error("{} ascending edges are not bordered by exactly two sectors", .edges.len())]
    Geometry { edges: BTreeSet<AscendingEdge> },
}

impl KnotFailure {
    /// The rejection tag of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            KnotFailure::OddLen { .. } => FailureKind::OddLen,
            KnotFailure::ContainsZero => FailureKind::ContainsZero,
            KnotFailure::InvalidNodeNumber { .. } => FailureKind::InvalidNodeNumber,
            KnotFailure::Repeated { .. } => FailureKind::Repeated,
            KnotFailure::Improper { .. } => FailureKind::Improper,
            KnotFailure::Geometry { .. } => FailureKind::Geometry,
        }
    }
}

/// Tag identifying the reason for a rejection.
///
/// The string form (`odd-len`, `contains-zero`, ...) is the key used in
/// catalog statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum FailureKind {
    OddLen,
    ContainsZero,
    InvalidNodeNumber,
    Repeated,
    Improper,
    Geometry,
}
