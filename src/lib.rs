// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration and cataloging of alternating knots.
//!
//! A knot diagram with `n` crossings is encoded as a cyclic vector of `2n`
//! signed crossing ids, positive where the rope passes over and negative
//! where it passes under (see [`geometry::Knot`]). The crate generates such
//! vectors, rejects the ones that do not describe a valid alternating planar
//! diagram, reduces the rest by removing trivial twists, and keeps a catalog
//! of one canonical representative per equivalence class.
//!
//! # Architecture
//!
//! - [`geometry`]: knot vectors, the edge index and sector tracing.
//! - [`validation`]: structural, alternation and geometric checks, each
//!   failing with a tagged [`validation::KnotFailure`].
//! - [`symmetry`]: canonical form and equivalence classes.
//! - [`simplify`]: twist removal down to a fixpoint.
//! - [`generator`]: seeded and exhaustive candidate generation.
//! - [`catalog`]: the catalog, its index and rejection statistics.
//! - [`survey`]: configured batch runs over many candidates.
//!
//! Everything except the survey driver is pure: values in, new values out.
//!
//! # Pipeline
//!
//! ```
//! use knot_catalog::catalog::CatalogState;
//! use knot_catalog::generator::knot_candidate;
//!
//! let state = (1000..1010)
//!     .map(|seed| knot_candidate(seed, 3))
//!     .fold(CatalogState::new(), |state, candidate| state.consider(&candidate).0);
//! assert_eq!(state.catalog().len(), 1);
//! ```

pub mod catalog;
pub mod generator;
pub mod geometry;
pub mod simplify;
pub mod survey;
pub mod symmetry;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogState, Outcome, Statistics};
pub use geometry::Knot;
pub use survey::SurveyConfig;
pub use validation::{FailureKind, KnotFailure};
