//! Route Configuration Module
//!
//! Assembles the resource routers into the application router.
//!
//! # Route Organization
//!
//! 1. **Home** - `GET /`
//! 2. **Resource modules** - nested under a fixed prefix each:
//!    `/auth`, `/books`, `/listings`, `/conversations`, `/favorites`
//! 3. **Static files** - anything else is looked up in the public directory
//! 4. **404** - JSON `{ "error": ... }` when no file matches
//!
//! Every request passes through `TraceLayer`, which logs method, path,
//! status and latency at debug level under the `tower_http` target.

/// Main router creation
pub mod router;

pub use router::create_router;
