// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics count why candidates were turned away from a catalog: one
//! counter per rejection tag plus one for duplicates. They are part of the
//! catalog state and are carried forward by every consideration.

use crate::validation::FailureKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

/// Statistics key for duplicate candidates.
pub const DUPLICATE_TAG: &str = "dup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Counter {
    Rejected(FailureKind),
    Duplicate,
}

const COUNT: usize = FailureKind::COUNT + 1;

impl Counter {
    fn slot(self) -> usize {
        match self {
            Counter::Rejected(kind) => kind as usize,
            Counter::Duplicate => FailureKind::COUNT,
        }
    }

    /// All counters, rejection tags first.
    pub fn all() -> impl Iterator<Item = Counter> {
        FailureKind::iter()
            .map(Counter::Rejected)
            .chain(std::iter::once(Counter::Duplicate))
    }

    /// The statistics key for this counter.
    pub fn tag(self) -> &'static str {
        match self {
            Counter::Rejected(kind) => kind.into(),
            Counter::Duplicate => DUPLICATE_TAG,
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("unknown statistics tag {0:?}")]
    UnknownTag(String),
}

impl FromStr for Counter {
    type Err = StatisticsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag == DUPLICATE_TAG {
            return Ok(Counter::Duplicate);
        }
        FailureKind::from_str(tag)
            .map(Counter::Rejected)
            .map_err(|_| StatisticsError::UnknownTag(tag.to_string()))
    }
}

/// Occurrence count per counter.
///
/// Serializes as a `tag -> count` map holding only nonzero counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u64>", try_from = "BTreeMap<String, u64>")]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counter) {
        self.stats[counter.slot()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter.slot()]
    }

    /// Total number of rejected candidates, over all tags.
    pub fn rejected(&self) -> u64 {
        FailureKind::iter()
            .map(|kind| self.get(Counter::Rejected(kind)))
            .sum()
    }

    pub fn duplicates(&self) -> u64 {
        self.get(Counter::Duplicate)
    }

    /// Nonzero counters in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::all()
            .map(|counter| (counter, self.get(counter)))
            .filter(|&(_, count)| count > 0)
    }
}

impl From<Statistics> for BTreeMap<String, u64> {
    fn from(statistics: Statistics) -> Self {
        statistics
            .iter()
            .map(|(counter, count)| (counter.tag().to_string(), count))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, u64>> for Statistics {
    type Error = StatisticsError;

    fn try_from(map: BTreeMap<String, u64>) -> Result<Self, Self::Error> {
        let mut statistics = Statistics::new();
        for (tag, count) in map {
            let counter: Counter = tag.parse()?;
            statistics.stats[counter.slot()] = count;
        }
        Ok(statistics)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (counter, count) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", counter, count)?;
            first = false;
        }
        if first {
            write!(f, "(none)")?;
        }
        Ok(())
    }
}
