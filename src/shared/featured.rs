//! Featured Item Selection
//!
//! The home page shows a small random sample of the eligible rows returned by
//! the home query. Selection is a pure function of the pool size and a random
//! source, so tests can drive it with a seeded generator.
//!
//! # Small pools
//!
//! When fewer than [`FEATURED_SLOTS`] rows are available every row is
//! featured exactly once (in random order) and the remaining slots stay
//! empty. Indices are never repeated and never out of range.
//!
//! # Example
//!
//! ```rust
//! use bookswap::shared::featured::{random_featured_items, FEATURED_SLOTS};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let picks = random_featured_items(12, &mut rng);
//! assert_eq!(picks.len(), FEATURED_SLOTS);
//! ```

use rand::Rng;

/// Number of featured slots on the home page (`feature0` .. `feature4`)
pub const FEATURED_SLOTS: usize = 5;

/// Pick up to [`FEATURED_SLOTS`] distinct indices into `[0, n)`
///
/// Returns exactly `FEATURED_SLOTS` indices when `n >= FEATURED_SLOTS`,
/// otherwise a random permutation of `0..n`.
pub fn random_featured_items<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    rand::seq::index::sample(rng, n, n.min(FEATURED_SLOTS)).into_vec()
}

/// Map picked indices onto the fixed slot array
///
/// Slot `k` holds `items[picks[k]]`; slots without a pick are `None`.
/// Picks that fall outside `items` are ignored rather than panicking.
pub fn featured_slots<'a, T>(items: &'a [T], picks: &[usize]) -> [Option<&'a T>; FEATURED_SLOTS] {
    let mut slots = [None; FEATURED_SLOTS];
    for (slot, &index) in slots.iter_mut().zip(picks) {
        *slot = items.get(index);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_five_distinct_indices_for_large_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks = random_featured_items(20, &mut rng);

        assert_eq!(picks.len(), FEATURED_SLOTS);
        assert!(picks.iter().all(|&i| i < 20));
        let unique: HashSet<_> = picks.iter().collect();
        assert_eq!(unique.len(), FEATURED_SLOTS);
    }

    #[test]
    fn test_exactly_five_rows_uses_all_of_them() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picks = random_featured_items(5, &mut rng);
        picks.sort_unstable();
        assert_eq!(picks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_small_pool_features_every_row_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut picks = random_featured_items(3, &mut rng);
        picks.sort_unstable();
        assert_eq!(picks, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_featured_items(0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_picks() {
        let a = random_featured_items(50, &mut StdRng::seed_from_u64(99));
        let b = random_featured_items(50, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_featured_slots_fills_in_pick_order() {
        let items = ["a", "b", "c"];
        let slots = featured_slots(&items, &[2, 0]);
        assert_eq!(slots, [Some(&"c"), Some(&"a"), None, None, None]);
    }

    #[test]
    fn test_featured_slots_ignores_out_of_range() {
        let items = ["a"];
        let slots = featured_slots(&items, &[0, 7]);
        assert_eq!(slots, [Some(&"a"), None, None, None, None]);
    }
}
