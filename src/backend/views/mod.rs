//! Views Module
//!
//! Server-rendered pages built with `maud`. Every render function takes its
//! data, including the session display name, as explicit arguments and
//! returns `Markup`; handlers wrap the result in `Html`.
//!
//! - **`layout`** - Page chrome and navigation
//! - **`home`** - Featured items
//! - **`auth`** - Login and registration forms
//! - **`books`** - Item detail
//! - **`listings`** - The session user's own items

pub mod auth;
pub mod books;
pub mod home;
pub mod layout;
pub mod listings;
