/**
 * Session Cookies
 *
 * The session lives entirely in the client: a `session` cookie whose value
 * is an HS256-signed token carrying the user id and display name. Nothing is
 * stored server side.
 *
 * # Key Rotation
 *
 * `SessionKeys` holds one or more secrets. New cookies are always signed
 * with the first key; verification accepts any configured key, so a key can
 * be rotated by prepending the new one and dropping the old one a day later.
 *
 * # Expiry
 *
 * Tokens expire after 24 hours, matching the cookie's `Max-Age`.
 */

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{header::COOKIE, HeaderMap};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::server::config::ConfigError;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Session lifetime in seconds (24 hours)
pub const SESSION_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Claims carried in the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: String,
    /// Display username
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// The logged-in user, as recovered from a valid cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub name: String,
}

/// Signing and verification keys for session cookies
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<KeyRing>,
}

struct KeyRing {
    signing: EncodingKey,
    verifying: Vec<DecodingKey>,
}

impl SessionKeys {
    /// Build a key ring from raw secrets; the first secret signs
    pub fn new<S: AsRef<str>>(secrets: &[S]) -> Result<Self, ConfigError> {
        let first = secrets.first().ok_or_else(|| ConfigError::Invalid {
            key: "SESSION_KEYS".to_string(),
            message: "at least one key is required".to_string(),
        })?;

        Ok(Self {
            inner: Arc::new(KeyRing {
                signing: EncodingKey::from_secret(first.as_ref().as_bytes()),
                verifying: secrets
                    .iter()
                    .map(|s| DecodingKey::from_secret(s.as_ref().as_bytes()))
                    .collect(),
            }),
        })
    }

    /// Issue a token for a user, valid for 24 hours from now
    pub fn issue(&self, user_id: Uuid, name: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, name, unix_now())
    }

    /// Issue a token as if it were `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        user_id: Uuid,
        name: &str,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: issued_at + SESSION_MAX_AGE_SECS,
            iat: issued_at,
        };
        encode(&Header::default(), &claims, &self.inner.signing)
    }

    /// Verify a token against every configured key
    ///
    /// Returns `None` for expired, tampered or malformed tokens.
    pub fn verify(&self, token: &str) -> Option<SessionUser> {
        let validation = Validation::default();

        let claims = self
            .inner
            .verifying
            .iter()
            .find_map(|key| decode::<SessionClaims>(token, key, &validation).ok())?
            .claims;

        let user_id = Uuid::parse_str(&claims.sub).ok()?;
        Some(SessionUser {
            user_id,
            name: claims.name,
        })
    }

    /// Read and verify the session cookie from request headers
    pub fn user_from_headers(&self, headers: &HeaderMap) -> Option<SessionUser> {
        let token = session_token(headers)?;
        let user = self.verify(token);
        if user.is_none() {
            tracing::debug!("Ignoring invalid or expired session cookie");
        }
        user
    }
}

/// Extract the raw `session` cookie value from the `Cookie` headers
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value that stores a session token
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token, SESSION_MAX_AGE_SECS
    )
}

/// `Set-Cookie` value that deletes the session
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", SESSION_COOKIE)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const KEY_A: &str = "40ed1e00-25ea-4136-bc6b-e7451fb3d11a";
    const KEY_B: &str = "f92c5252-5913-4bfa-82a6-1cffe026956f";

    #[test]
    fn test_empty_key_ring_rejected() {
        let empty: [&str; 0] = [];
        assert!(SessionKeys::new(&empty).is_err());
    }

    #[test]
    fn test_issue_and_verify() {
        let keys = SessionKeys::new(&[KEY_A]).unwrap();
        let user_id = Uuid::new_v4();

        let token = keys.issue(user_id, "alice").unwrap();
        let user = keys.verify(&token).unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.name, "alice");
    }

    #[test]
    fn test_rotated_key_still_verifies() {
        let old = SessionKeys::new(&[KEY_B]).unwrap();
        let token = old.issue(Uuid::new_v4(), "bob").unwrap();

        let rotated = SessionKeys::new(&[KEY_A, KEY_B]).unwrap();
        assert_eq!(rotated.verify(&token).unwrap().name, "bob");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let token = SessionKeys::new(&[KEY_B]).unwrap().issue(Uuid::new_v4(), "eve").unwrap();
        assert!(SessionKeys::new(&[KEY_A]).unwrap().verify(&token).is_none());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = SessionKeys::new(&[KEY_A]).unwrap();
        let mut token = keys.issue(Uuid::new_v4(), "alice").unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_none());
        assert!(keys.verify("invalid.token.here").is_none());
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = SessionKeys::new(&[KEY_A]).unwrap();
        let two_days_ago = unix_now() - 2 * SESSION_MAX_AGE_SECS;
        let token = keys.issue_at(Uuid::new_v4(), "alice", two_days_ago).unwrap();
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn test_session_token_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session=abc.def.ghi; other=1"),
        );
        assert_eq!(session_token(&headers), Some("abc.def.ghi"));

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session="));
        assert_eq!(session_token(&headers), None);

        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_user_from_headers_round_trip() {
        let keys = SessionKeys::new(&[KEY_A, KEY_B]).unwrap();
        let token = keys.issue(Uuid::new_v4(), "carol").unwrap();

        let mut headers = HeaderMap::new();
        let cookie = format!("{}={}", SESSION_COOKIE, token);
        headers.insert(COOKIE, HeaderValue::from_str(&cookie).unwrap());

        assert_eq!(keys.user_from_headers(&headers).unwrap().name, "carol");
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("tok");
        assert!(cookie.starts_with("session=tok;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));

        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
