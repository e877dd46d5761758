// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for knot diagrams.
//!
//! This module contains the representations the algorithms operate on:
//! - Knot: Signed crossing sequence, read cyclically
//! - EdgeIndex: Cyclic predecessor/successor of every signed crossing
//! - AscendingEdge: Rope segment leaving an under-crossing
//! - Path: Partial walk over ascending edges
//! - Sector: Closed walk bounding a planar region

pub mod edge;
pub mod knot;
pub mod sector;

// Re-export for convenience
pub use edge::{ascending_edges, index_edges, AscendingEdge, EdgeIndex};
pub use knot::{Crossing, Knot, ParseKnotError};
pub use sector::{all_sectors, ascending_step, is_sector, sector_ascending_edges, Path, Sector};
