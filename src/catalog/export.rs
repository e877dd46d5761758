// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON export of a catalog and its statistics.
//!
//! ```json
//! {
//!   "catalog": { "3": [[1, -2, 3, -1, 2, -3]] },
//!   "stats": { "dup": 199 }
//! }
//! ```
//!
//! The index is not stored; it is rebuilt from the catalog on load. Loading
//! therefore checks every representative first: it must be a valid knot, in
//! canonical and simplified form, filed under its own crossing count.

use super::{Catalog, Statistics};
use crate::geometry::Knot;
use crate::simplify::simplify;
use crate::symmetry::canonicalize;
use crate::validation::check_all;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog file {path}: representative {knot} {reason}")]
    Invalid {
        path: String,
        knot: Knot,
        reason: String,
    },
}

/// Serializable snapshot of a catalog state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExport {
    pub catalog: Catalog,
    #[serde(default)]
    pub stats: Statistics,
}

impl CatalogExport {
    /// Read an export from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let export: CatalogExport =
            serde_json::from_str(&contents).map_err(|source| ExportError::Json {
                path: path.display().to_string(),
                source,
            })?;
        export.check_representatives().map_err(|(knot, reason)| ExportError::Invalid {
            path: path.display().to_string(),
            knot,
            reason,
        })?;
        Ok(export)
    }

    /// Find the first representative that could not have been admitted.
    fn check_representatives(&self) -> Result<(), (Knot, String)> {
        for (crossings, bucket) in self.catalog.buckets() {
            for knot in bucket {
                let reject = |reason: String| Err((knot.clone(), reason));
                if let Err(failure) = check_all(knot) {
                    return reject(format!("is rejected ({}): {}", failure.kind(), failure));
                }
                if knot.crossing_count() != crossings {
                    return reject(format!("is filed under {} crossings", crossings));
                }
                if canonicalize(knot) != *knot {
                    return reject("is not in canonical form".to_string());
                }
                if simplify(knot) != *knot {
                    return reject("is not simplified".to_string());
                }
            }
        }
        Ok(())
    }

    /// Write this export as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| ExportError::Json {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
