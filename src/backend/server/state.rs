/**
 * Application State Management
 *
 * `AppState` is the single dependency handed to every route module factory.
 * It holds the database pool and the session key ring; there is no other
 * process-wide state.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the part they
 * need (`State<PgPool>`) and let the session extractors find the key ring.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::PgPool;
 *
 * async fn handler(State(pool): State<PgPool>) {
 *     let _ = sqlx::query("SELECT 1").execute(&pool).await;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionKeys;

/// Shared application state
///
/// Cloning is cheap: `PgPool` and `SessionKeys` are both reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Handlers check a connection out per query and never hold it beyond
    /// the request.
    pub db: PgPool,

    /// Session cookie signing / verification keys
    pub sessions: SessionKeys,
}

impl AppState {
    pub fn new(db: PgPool, sessions: SessionKeys) -> Self {
        Self { db, sessions }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
