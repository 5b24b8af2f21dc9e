/**
 * Session Extractors
 *
 * Handlers never read the cookie themselves. They declare what they need:
 *
 * - `MaybeUser` - the session user if the cookie is valid, `None` otherwise
 *   (public pages that greet logged-in users)
 * - `AuthUser` - the session user, or a 401 JSON error (pages and APIs that
 *   require login)
 *
 * Both only need a `SessionKeys` reachable from the router state.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::auth::sessions::{SessionKeys, SessionUser};
use crate::backend::error::BackendError;

/// Optional session user
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<SessionUser>);

impl MaybeUser {
    /// Display name for templates
    pub fn name(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.name.as_str())
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = SessionKeys::from_ref(state);
        Ok(MaybeUser(keys.user_from_headers(&parts.headers)))
    }
}

/// Required session user
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = SessionKeys::from_ref(state);
        keys.user_from_headers(&parts.headers)
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized("Login required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, Request, StatusCode};
    use uuid::Uuid;

    fn keys() -> SessionKeys {
        SessionKeys::new(&["0123456789abcdef0123456789abcdef"]).unwrap()
    }

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_maybe_user_without_cookie() {
        let mut parts = parts_with_cookie(None);
        let MaybeUser(user) = MaybeUser::from_request_parts(&mut parts, &keys()).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_maybe_user_with_cookie() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4(), "dana").unwrap();
        let mut parts = parts_with_cookie(Some(format!("session={}", token)));

        let user = MaybeUser::from_request_parts(&mut parts, &keys).await.unwrap();
        assert_eq!(user.name(), Some("dana"));
    }

    #[tokio::test]
    async fn test_auth_user_rejects_missing_session() {
        let mut parts = parts_with_cookie(None);
        let err = AuthUser::from_request_parts(&mut parts, &keys()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_user_rejects_garbage_cookie() {
        let mut parts = parts_with_cookie(Some("session=not-a-token".to_string()));
        let err = AuthUser::from_request_parts(&mut parts, &keys()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
