/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from environment
 * variables (a `.env` file is loaded by `main` beforehand) and opens the
 * PostgreSQL pool.
 *
 * # Configuration Sources
 *
 * | Variable             | Default  | Notes                                   |
 * |----------------------|----------|-----------------------------------------|
 * | `PORT`               | `8080`   |                                         |
 * | `DATABASE_URL`       |          | or `DB_HOST`/`DB_PORT`/`DB_USER`/...    |
 * | `DB_MAX_CONNECTIONS` | `10`     |                                         |
 * | `SESSION_KEYS`       |          | comma separated, first key signs        |
 * | `STATIC_DIR`         | `public` |                                         |
 *
 * # Error Handling
 *
 * Unlike optional integrations, the database and the session keys are hard
 * requirements: any problem here is returned as an error and `main` exits
 * before binding the listener.
 */

use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

/// Shortest accepted session signing key, in bytes
pub const MIN_SESSION_KEY_LEN: usize = 16;

/// Configuration errors detected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable {0}")]
    Missing(String),

    /// A variable is set but unusable
    #[error("Invalid value for {key}: {message}")]
    Invalid {
        /// Variable name
        key: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Session cookie signing keys; the first one signs
    pub session_keys: Vec<String>,
    /// Directory served for unmatched paths (compiled CSS, images, scripts)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("PORT", format!("'{}' is not a port number", raw)))?,
            None => 8080,
        };

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&get)?,
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::invalid(
                        "DB_MAX_CONNECTIONS",
                        "must be a positive integer",
                    ))
                }
            },
            None => 10,
        };

        let session_keys = parse_session_keys(
            &get("SESSION_KEYS").ok_or_else(|| ConfigError::Missing("SESSION_KEYS".to_string()))?,
        )?;

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        Ok(Self {
            port,
            database_url,
            max_connections,
            session_keys,
            static_dir,
        })
    }
}

/// Assemble a connection string from `DB_HOST`, `DB_PORT`, `DB_USER`,
/// `DB_PASS` and `DB_NAME`
fn database_url_from_parts<G>(get: &G) -> Result<String, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let host = get("DB_HOST").ok_or_else(|| ConfigError::Missing("DATABASE_URL or DB_HOST".to_string()))?;
    let port = get("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let user = get("DB_USER").ok_or_else(|| ConfigError::Missing("DB_USER".to_string()))?;
    let name = get("DB_NAME").ok_or_else(|| ConfigError::Missing("DB_NAME".to_string()))?;

    port.parse::<u16>()
        .map_err(|_| ConfigError::invalid("DB_PORT", format!("'{}' is not a port number", port)))?;

    Ok(match get("DB_PASS") {
        Some(pass) => format!("postgres://{}:{}@{}:{}/{}", user, pass, host, port, name),
        None => format!("postgres://{}@{}:{}/{}", user, host, port, name),
    })
}

/// Split and validate `SESSION_KEYS`
fn parse_session_keys(raw: &str) -> Result<Vec<String>, ConfigError> {
    let keys: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    if keys.is_empty() {
        return Err(ConfigError::invalid("SESSION_KEYS", "at least one key is required"));
    }
    if let Some(short) = keys.iter().position(|k| k.len() < MIN_SESSION_KEY_LEN) {
        return Err(ConfigError::invalid(
            "SESSION_KEYS",
            format!("key #{} is shorter than {} bytes", short + 1, MIN_SESSION_KEY_LEN),
        ));
    }
    Ok(keys)
}

/// Open the PostgreSQL pool and apply embedded migrations
///
/// The first connection is established eagerly so an unreachable database
/// is reported at startup rather than on the first request.
pub async fn load_database(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(max_connections = config.max_connections, "Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY_A: &str = "40ed1e00-25ea-4136-bc6b-e7451fb3d11a";
    const KEY_B: &str = "f92c5252-5913-4bfa-82a6-1cffe026956f";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bookswap"),
            ("SESSION_KEYS", KEY_A),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.session_keys, vec![KEY_A.to_string()]);
    }

    #[test]
    fn test_two_session_keys_in_order() {
        let keys = format!("{}, {}", KEY_A, KEY_B);
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bookswap"),
            ("SESSION_KEYS", &keys),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.session_keys, vec![KEY_A.to_string(), KEY_B.to_string()]);
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DB_HOST", "db"),
            ("DB_USER", "labber"),
            ("DB_PASS", "labber"),
            ("DB_NAME", "midterm"),
            ("SESSION_KEYS", KEY_A),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://labber:labber@db:5432/midterm");
    }

    #[test]
    fn test_missing_database() {
        let err = ServerConfig::from_lookup(lookup(&[("SESSION_KEYS", KEY_A)])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL or DB_HOST".to_string()));
    }

    #[test]
    fn test_missing_session_keys() {
        let err = ServerConfig::from_lookup(lookup(&[(
            "DATABASE_URL",
            "postgres://localhost/bookswap",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SESSION_KEYS".to_string()));
    }

    #[test]
    fn test_short_session_key_rejected() {
        let keys = format!("{},short", KEY_A);
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bookswap"),
            ("SESSION_KEYS", &keys),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "SESSION_KEYS"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/bookswap"),
            ("SESSION_KEYS", KEY_A),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
    }
}
