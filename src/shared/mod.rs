//! Shared Module
//!
//! Pure, I/O-free helpers used by the route handlers and templates. Nothing
//! in here touches the database or the request, which keeps these pieces
//! trivially unit-testable.
//!
//! # Overview
//!
//! - **`featured`** - Random selection of the home page's featured slots
//! - **`time_ago`** - Relative time strings ("3 days ago")
//! - **`money`** - Cents formatting and form price parsing
//! - **`error`** - Validation error type

/// Shared error types
pub mod error;

/// Featured item selection for the home page
pub mod featured;

/// Relative time formatting
pub mod time_ago;

/// Price parsing and formatting
pub mod money;

/// Re-export commonly used items for convenience
pub use error::SharedError;
pub use featured::{featured_slots, random_featured_items, FEATURED_SLOTS};
pub use money::{format_cents, parse_price};
pub use time_ago::time_ago;
