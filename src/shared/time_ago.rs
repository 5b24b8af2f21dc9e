//! Relative Time Formatting
//!
//! Turns an absolute timestamp into a short human string such as
//! `"3 days ago"` or `"in 2 hours"`, relative to a caller-supplied "now".
//!
//! # Buckets
//!
//! The difference in seconds is divided down through seconds, minutes,
//! hours, days, weeks, months and years until it no longer fills the next
//! unit, then floored. A value of exactly one uses the singular phrase;
//! anything under ten seconds is `"just now"` (or `"right now"` for future
//! timestamps).
//!
//! # Example
//!
//! ```rust
//! use bookswap::shared::time_ago::time_ago;
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
//! assert_eq!(time_ago(now + Duration::hours(3), now), "in 3 hours");
//! ```

use chrono::{DateTime, Utc};

/// Divisors taking each unit to the next (s→min→h→d→w→month→year)
const UNIT_STEPS: [f64; 6] = [60.0, 60.0, 24.0, 7.0, 365.0 / 7.0 / 12.0, 12.0];

/// `(past, future)` phrasing per bucket; `%s` is replaced by the count
const PHRASES: [(&str, &str); 14] = [
    ("just now", "right now"),
    ("%s seconds ago", "in %s seconds"),
    ("1 minute ago", "in 1 minute"),
    ("%s minutes ago", "in %s minutes"),
    ("1 hour ago", "in 1 hour"),
    ("%s hours ago", "in %s hours"),
    ("1 day ago", "in 1 day"),
    ("%s days ago", "in %s days"),
    ("1 week ago", "in 1 week"),
    ("%s weeks ago", "in %s weeks"),
    ("1 month ago", "in 1 month"),
    ("%s months ago", "in %s months"),
    ("1 year ago", "in 1 year"),
    ("%s years ago", "in %s years"),
];

/// Format `then` relative to `now`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_milliseconds() as f64 / 1000.0;
    format_seconds(seconds)
}

/// Format a signed difference in seconds (positive means the past)
pub fn format_seconds(seconds: f64) -> String {
    let future = seconds < 0.0;
    let mut diff = seconds.abs();

    let mut bucket = 0;
    while bucket < UNIT_STEPS.len() && diff >= UNIT_STEPS[bucket] {
        diff /= UNIT_STEPS[bucket];
        bucket += 1;
    }
    let count = diff.floor() as u64;

    let mut index = bucket * 2;
    let singular_limit = if index == 0 { 9 } else { 1 };
    if count > singular_limit {
        index += 1;
    }

    let (past, ahead) = PHRASES[index];
    let phrase = if future { ahead } else { past };
    phrase.replace("%s", &count.to_string())
}
