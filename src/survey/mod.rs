// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog surveys.
//!
//! A survey generates candidates for one crossing count, either from a range
//! of seeds or from every leaf of the candidate tree, and feeds them into a
//! catalog state.
//!
//! # Parallelization
//!
//! Validation and simplification are pure per candidate, so they run on the
//! rayon thread pool when `parallel` is set. Admission into the catalog is
//! then applied serially in candidate order, so a parallel survey produces
//! exactly the catalog and statistics of a serial one.

pub mod config;

pub use config::{check_crossings, ConfigError, SeedRange, SurveyConfig};

use crate::catalog::{prepare, CatalogState, Outcome};
use crate::generator::{knot_candidate, CandidateTree};
use crate::geometry::Knot;
use rayon::prelude::*;
use tracing::info;

/// Summary of one survey run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyReport {
    /// Number of candidates considered.
    pub considered: usize,
    /// Knots added to the catalog, in the order they were found.
    pub added: Vec<Knot>,
}

/// The candidates a survey considers, in order.
pub fn candidates(config: &SurveyConfig) -> Vec<Knot> {
    if config.exhaustive {
        CandidateTree::new(config.crossings).collect()
    } else {
        config
            .seeds
            .iter()
            .map(|seed| knot_candidate(seed, config.crossings))
            .collect()
    }
}

/// Run a survey, returning the updated catalog state and a report.
///
/// # Panics
///
/// Panics if the crossing count exceeds
/// [`MAX_CROSSINGS`](crate::generator::MAX_CROSSINGS); configs that pass
/// [`SurveyConfig::validate`] never do.
pub fn run(config: &SurveyConfig, state: CatalogState) -> (CatalogState, SurveyReport) {
    let candidates = candidates(config);
    info!(
        crossings = config.crossings,
        candidates = candidates.len(),
        exhaustive = config.exhaustive,
        parallel = config.parallel,
        "starting survey"
    );

    let prepared: Vec<_> = if config.parallel {
        candidates.par_iter().map(prepare).collect()
    } else {
        candidates.iter().map(prepare).collect()
    };

    let mut report = SurveyReport {
        considered: prepared.len(),
        added: Vec::new(),
    };
    let state = prepared.into_iter().fold(state, |state, result| {
        let (state, outcome) = state.admit(result);
        if let Outcome::Added(knot) = outcome {
            report.added.push(knot);
        }
        state
    });

    info!(
        considered = report.considered,
        added = report.added.len(),
        catalog = state.catalog().len(),
        stats = %state.stats(),
        "survey complete"
    );
    (state, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Counter;

    fn config(crossings: usize, parallel: bool) -> SurveyConfig {
        SurveyConfig {
            crossings,
            parallel,
            ..SurveyConfig::default()
        }
    }

    #[test]
    fn test_candidates_from_seeds() {
        let config = SurveyConfig {
            seeds: SeedRange::new(1001, 1004),
            ..config(3, false)
        };
        let candidates = candidates(&config);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], knot_candidate(1001, 3));
    }

    #[test]
    fn test_candidates_exhaustive() {
        let config = SurveyConfig {
            exhaustive: true,
            ..config(5, false)
        };
        assert_eq!(candidates(&config).len(), 23);
    }

    #[test]
    fn test_trefoil_survey() {
        let (state, report) = run(&config(3, false), CatalogState::new());
        assert_eq!(report.considered, 200);
        assert_eq!(report.added, vec![Knot::from([1, -2, 3, -1, 2, -3])]);
        assert_eq!(state.stats().get(Counter::Duplicate), 199);
        assert_eq!(state.stats().rejected(), 0);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let (serial, serial_report) = run(&config(5, false), CatalogState::new());
        let (parallel, parallel_report) = run(&config(5, true), CatalogState::new());
        assert_eq!(serial.catalog(), parallel.catalog());
        assert_eq!(serial.stats(), parallel.stats());
        assert_eq!(serial_report, parallel_report);
    }

    #[test]
    fn test_survey_resumes_from_state() {
        let (state, _) = run(&config(3, false), CatalogState::new());
        let (state, report) = run(&config(3, true), state);
        assert!(report.added.is_empty());
        assert_eq!(state.stats().duplicates(), 399);
    }
}
