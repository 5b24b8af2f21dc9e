//! Property-based tests for the pure helpers

use std::collections::HashSet;

use bookswap::shared::{
    featured_slots, format_cents, parse_price, random_featured_items, time_ago, FEATURED_SLOTS,
};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #[test]
    fn test_featured_picks_are_distinct_and_in_range(n in 0usize..500, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = random_featured_items(n, &mut rng);

        prop_assert_eq!(picks.len(), n.min(FEATURED_SLOTS));
        prop_assert!(picks.iter().all(|&i| i < n));

        let unique: HashSet<_> = picks.iter().collect();
        prop_assert_eq!(unique.len(), picks.len());
    }

    #[test]
    fn test_small_pools_are_fully_covered(n in 0usize..FEATURED_SLOTS, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picks = random_featured_items(n, &mut rng);
        picks.sort_unstable();
        prop_assert_eq!(picks, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_slots_filled_in_order(n in 0usize..20, seed in any::<u64>()) {
        let items: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = random_featured_items(n, &mut rng);
        let slots = featured_slots(&items, &picks);

        prop_assert_eq!(slots.iter().filter(|s| s.is_some()).count(), picks.len());
        for (slot, pick) in slots.iter().zip(&picks) {
            prop_assert_eq!(*slot, Some(&items[*pick]));
        }
    }

    #[test]
    fn test_past_is_ago_future_is_in(secs in 10i64..(20 * 365 * 24 * 3600)) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let past = time_ago(now - Duration::seconds(secs), now);
        prop_assert!(past.ends_with(" ago"), "{}", past);

        let future = time_ago(now + Duration::seconds(secs), now);
        prop_assert!(future.starts_with("in "), "{}", future);
    }

    #[test]
    fn test_price_round_trips_through_display(cents in 0i64..10_000_000_000) {
        let shown = format_cents(cents);
        prop_assert_eq!(parse_price(&shown).unwrap(), cents);
    }

    #[test]
    fn test_parse_price_never_panics(input in ".{0,24}") {
        let _ = parse_price(&input);
    }
}
