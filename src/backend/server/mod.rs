//! Server Module
//!
//! Everything needed to turn configuration into a running application.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Environment configuration and database pool setup
//! - **`init`** - Builds the application router from configuration
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` validates every variable
//! 2. **Session Keys**: the key ring is built from `SESSION_KEYS`
//! 3. **Database**: pool connected, migrations applied
//! 4. **Router Creation**: resource modules mounted with the shared state
//!
//! Any failure along the way aborts startup.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
