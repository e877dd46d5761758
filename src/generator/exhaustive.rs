// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive walk over the candidate tree.
//!
//! [`knot_candidate`](super::knot_candidate) samples one path through a tree
//! whose branches at each depth are the [`element_candidates`] for the partial
//! vector so far. This module walks every path of that tree depth first, in
//! ascending choice order, yielding each leaf.
//!
//! # Architecture
//!
//! The walker keeps a stack of choice points. Each stack entry tracks:
//! - The candidates available at that depth
//! - The next candidate to try on backtracking
//!
//! The partial vector always holds exactly one element per stack entry (the
//! choice currently being explored at that depth), so backtracking is a pop
//! from both.

use super::{element_candidates, MAX_CROSSINGS};
use crate::geometry::{Crossing, Knot};

/// Stack entry tracking one choice point.
#[derive(Debug)]
struct StackEntry {
    /// Candidates for this position.
    choices: Vec<Crossing>,

    /// Index of the next candidate to try.
    next_choice: usize,
}

/// Iterator over every leaf of the candidate tree for a crossing count.
///
/// A leaf is a vector of length `2 * target_n`, or a shorter vector that no
/// candidate can extend.
///
/// # Example
///
/// ```
/// use knot_catalog::generator::CandidateTree;
/// use knot_catalog::geometry::Knot;
///
/// let leaves: Vec<Knot> = CandidateTree::new(3).collect();
/// assert_eq!(leaves, vec![Knot::from([1, -2, 3, -1, 2, -3])]);
/// ```
#[derive(Debug)]
pub struct CandidateTree {
    target_n: usize,
    partial: Vec<Crossing>,
    stack: Vec<StackEntry>,
    started: bool,
}

impl CandidateTree {
    /// # Panics
    ///
    /// Panics if `target_n` exceeds [`MAX_CROSSINGS`].
    pub fn new(target_n: usize) -> Self {
        assert!(
            target_n <= MAX_CROSSINGS,
            "crossing count {} exceeds {}",
            target_n,
            MAX_CROSSINGS
        );
        Self {
            target_n,
            partial: Vec::new(),
            stack: Vec::new(),
            started: false,
        }
    }

    /// Follow first choices from the current partial vector down to a leaf.
    fn descend(&mut self) -> Knot {
        while self.partial.len() < 2 * self.target_n {
            let choices = element_candidates(&self.partial, self.target_n);
            let Some(&first) = choices.first() else {
                break;
            };
            self.partial.push(first);
            self.stack.push(StackEntry {
                choices,
                next_choice: 1,
            });
        }
        Knot::new(self.partial.clone())
    }

    /// Replace the deepest choice that still has alternatives with its next
    /// alternative. Returns false when every choice is exhausted.
    fn backtrack(&mut self) -> bool {
        while let Some(entry) = self.stack.last_mut() {
            self.partial.pop();
            if entry.next_choice < entry.choices.len() {
                self.partial.push(entry.choices[entry.next_choice]);
                entry.next_choice += 1;
                return true;
            }
            self.stack.pop();
        }
        false
    }
}

impl Iterator for CandidateTree {
    type Item = Knot;

    fn next(&mut self) -> Option<Knot> {
        if !self.started {
            self.started = true;
            return Some(self.descend());
        }
        if self.backtrack() {
            Some(self.descend())
        } else {
            None
        }
    }
}
