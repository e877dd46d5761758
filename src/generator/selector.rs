// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deterministic selector for candidate generation.
//!
//! The selector reads a seed as a number in a mixed radix, one digit per draw:
//! each draw with bound `n` takes the remainder modulo `n` and divides the
//! state by `n`. When the state runs out the running base is multiplied by 31
//! and becomes the new state, so later draws keep varying with the seed.
//!
//! State is held in `u128` and the base multiplication wraps, so after about
//! 25 depletions the base differs from the unbounded product `seed * 31^k`.
//! Draws remain deterministic for a given seed.
//!
//! A selector is a plain value. Draws from one selector must be sequential;
//! give each concurrent generation its own selector.

/// Multiplier applied to the running base each time the state is exhausted.
const BASE_MULTIPLIER: u128 = 31;

/// Selector state: the current remainder and the current base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    remainder: u128,
    base: u128,
}

impl Selector {
    /// Create a selector whose remainder and base both start at `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            remainder: seed as u128,
            base: seed as u128,
        }
    }

    /// Draw a digit in `0..bound`, returning it with the successor state.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next(self, bound: usize) -> (usize, Selector) {
        assert!(bound > 0, "selector bound must be positive");
        let bound = bound as u128;
        let digit = (self.remainder % bound) as usize;
        let remainder = self.remainder / bound;

        let next = if remainder == 0 {
            let base = self.base.wrapping_mul(BASE_MULTIPLIER);
            Selector {
                remainder: base,
                base,
            }
        } else {
            Selector {
                remainder,
                base: self.base,
            }
        };
        (digit, next)
    }

    /// Draw a digit in `0..bound`, advancing this selector in place.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn select(&mut self, bound: usize) -> usize {
        let (digit, next) = self.next(bound);
        *self = next;
        digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_digits() {
        let mut selector = Selector::new(10);
        let digits: Vec<usize> = (0..6).map(|_| selector.select(3)).collect();
        assert_eq!(digits, vec![1, 0, 1, 1, 1, 1]);
        assert_eq!(
            selector,
            Selector {
                remainder: 11,
                base: 310
            }
        );
    }

    #[test]
    fn test_base_multiplies_cumulatively() {
        let mut selector = Selector::new(1001);
        let digits: Vec<usize> = (0..14).map(|_| selector.select(2)).collect();
        assert_eq!(digits, vec![1, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(selector.base, 1001 * 31);
        assert_eq!(selector.remainder, 1939);
    }

    #[test]
    fn test_next_is_pure() {
        let selector = Selector::new(42);
        let (first, _) = selector.next(5);
        let (again, _) = selector.next(5);
        assert_eq!(first, again);
        assert_eq!(first, 2);
    }

    #[test]
    fn test_zero_seed_always_draws_zero() {
        let mut selector = Selector::new(0);
        assert!((0..10).all(|_| selector.select(7) == 0));
    }

    #[test]
    fn test_bound_one_draws_zero() {
        let mut selector = Selector::new(99);
        assert_eq!(selector.select(1), 0);
    }

    #[test]
    #[should_panic(expected = "selector bound must be positive")]
    fn test_zero_bound_panics() {
        Selector::new(5).select(0);
    }
}
