//! Bookswap - Main Library
//!
//! A server-rendered marketplace for second-hand books: accounts, listings,
//! buyer/seller conversations, favorites and a home page featuring items
//! from super sellers, backed by PostgreSQL.
//!
//! # Module Structure
//!
//! - **`shared`** - Pure helpers with no I/O
//!   - Featured item selection, relative time, money formatting
//!   - Validation error type
//!
//! - **`backend`** - The Axum server
//!   - Resource route modules and their SQL
//!   - `maud` templates
//!   - Cookie sessions, configuration, error handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookswap::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and helpers
pub mod shared;

/// Backend server-side code
pub mod backend;
