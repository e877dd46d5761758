// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog of distinct knots.
//!
//! The catalog holds one representative vector per known knot, bucketed by
//! crossing count. Alongside it, the catalog index maps every member of every
//! representative's equivalence class back to the representative, so a
//! duplicate is found with a single lookup.
//!
//! # Catalog state
//!
//! Catalog, index and statistics together form a [`CatalogState`]. Each
//! consideration consumes a state and returns the next one; nothing is
//! mutated behind the caller's back. Clone a state to keep a snapshot.
//!
//! Considering a candidate runs in two stages:
//!
//! 1. [`prepare`]: validate, then simplify. Pure, and safe to run for many
//!    candidates in parallel.
//! 2. [`CatalogState::admit`]: duplicate lookup and insert. Must be applied
//!    one candidate at a time per catalog, or two candidates from the same
//!    equivalence class could both be inserted.
//!
//! # Example
//!
//! ```
//! use knot_catalog::catalog::{CatalogState, Outcome};
//! use knot_catalog::geometry::Knot;
//!
//! let trefoil = Knot::from([1, -2, 3, -1, 2, -3]);
//! let (state, outcome) = CatalogState::new().consider(&trefoil);
//! assert_eq!(outcome, Outcome::Added(trefoil.clone()));
//!
//! let mirror = Knot::from([3, -2, 1, -3, 2, -1]);
//! let (state, outcome) = state.consider(&mirror);
//! assert_eq!(outcome, Outcome::Duplicate { of: trefoil });
//! assert_eq!(state.stats().duplicates(), 1);
//! ```

pub mod export;
pub mod statistics;

pub use export::{CatalogExport, ExportError};
pub use statistics::{Counter, Statistics, StatisticsError, DUPLICATE_TAG};

use crate::geometry::Knot;
use crate::simplify::simplify;
use crate::symmetry::{all_equivalent, canonicalize};
use crate::validation::{check_all, FailureKind, KnotFailure};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Representative vectors of known knots, keyed by crossing count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    knots: BTreeMap<usize, BTreeSet<Knot>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Representatives with `crossings` crossings.
    pub fn get(&self, crossings: usize) -> Option<&BTreeSet<Knot>> {
        self.knots.get(&crossings)
    }

    pub fn contains(&self, knot: &Knot) -> bool {
        self.knots
            .get(&knot.crossing_count())
            .is_some_and(|bucket| bucket.contains(knot))
    }

    /// Total number of representatives.
    pub fn len(&self) -> usize {
        self.knots.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.values().all(BTreeSet::is_empty)
    }

    /// Iterate over `(crossing count, representatives)` in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BTreeSet<Knot>)> {
        self.knots.iter().map(|(&n, bucket)| (n, bucket))
    }

    /// Iterate over all representatives, by crossing count then vector order.
    pub fn iter(&self) -> impl Iterator<Item = &Knot> {
        self.knots.values().flatten()
    }

    fn insert(&mut self, knot: Knot) {
        self.knots
            .entry(knot.crossing_count())
            .or_default()
            .insert(knot);
    }
}

impl FromIterator<Knot> for Catalog {
    fn from_iter<I: IntoIterator<Item = Knot>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for knot in iter {
            catalog.insert(knot);
        }
        catalog
    }
}

/// Map from every equivalent vector to its catalog representative.
pub type CatalogIndex = HashMap<Knot, Knot>;

/// Index every representative's equivalence class.
pub fn index_catalog(catalog: &Catalog) -> CatalogIndex {
    catalog
        .iter()
        .flat_map(|representative| {
            all_equivalent(representative)
                .into_iter()
                .map(move |member| (member, representative.clone()))
        })
        .collect()
}

/// What happened to a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected by validation.
    Rejected(FailureKind),
    /// Simplifies to a knot already in the catalog.
    Duplicate { of: Knot },
    /// Simplifies to a new knot, now in the catalog.
    Added(Knot),
}

/// Validate a candidate, then reduce it to canonical simplified form.
///
/// This is the pure, parallelizable part of catalog consideration.
pub fn prepare(candidate: &Knot) -> Result<Knot, KnotFailure> {
    check_all(candidate)?;
    Ok(canonicalize(&simplify(candidate)))
}

/// Catalog, index and statistics, threaded through every consideration.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
    index: CatalogIndex,
    stats: Statistics,
}

impl CatalogState {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing catalog and statistics, rebuilding the index.
    pub fn from_catalog(catalog: Catalog, stats: Statistics) -> Self {
        let index = index_catalog(&catalog);
        Self {
            catalog,
            index,
            stats,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Representative of the class containing `knot`, if known.
    pub fn lookup(&self, knot: &Knot) -> Option<&Knot> {
        self.index.get(knot)
    }

    /// Consider a candidate: validate, simplify, deduplicate and insert.
    pub fn consider(self, candidate: &Knot) -> (Self, Outcome) {
        let prepared = prepare(candidate);
        self.admit(prepared)
    }

    /// Record the result of [`prepare`]: count a rejection or duplicate, or
    /// insert a new representative and index its equivalence class.
    pub fn admit(mut self, prepared: Result<Knot, KnotFailure>) -> (Self, Outcome) {
        let reduced = match prepared {
            Ok(reduced) => reduced,
            Err(failure) => {
                let kind = failure.kind();
                debug!(tag = %kind, %failure, "candidate rejected");
                self.stats.increment_counter(Counter::Rejected(kind));
                return (self, Outcome::Rejected(kind));
            }
        };

        if let Some(representative) = self.index.get(&reduced) {
            debug!(knot = %reduced, of = %representative, "duplicate knot");
            let outcome = Outcome::Duplicate {
                of: representative.clone(),
            };
            self.stats.increment_counter(Counter::Duplicate);
            return (self, outcome);
        }

        debug!(knot = %reduced, crossings = reduced.crossing_count(), "new knot");
        for member in all_equivalent(&reduced) {
            self.index.insert(member, reduced.clone());
        }
        self.catalog.insert(reduced.clone());
        (self, Outcome::Added(reduced))
    }

    /// Snapshot of the catalog and statistics for serialization.
    pub fn export(&self) -> CatalogExport {
        CatalogExport {
            catalog: self.catalog.clone(),
            stats: self.stats,
        }
    }
}

impl From<CatalogExport> for CatalogState {
    fn from(export: CatalogExport) -> Self {
        CatalogState::from_catalog(export.catalog, export.stats)
    }
}
