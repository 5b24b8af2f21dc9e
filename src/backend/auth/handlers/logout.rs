use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
};

use crate::backend::auth::sessions::clear_session_cookie;
use crate::backend::middleware::MaybeUser;

/// Logout handler
///
/// Clears the session cookie and redirects home. Works whether or not the
/// caller was logged in.
pub async fn logout(user: MaybeUser) -> impl IntoResponse {
    if let Some(name) = user.name() {
        tracing::info!("User logged out: {}", name);
    }
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::LOCATION, StatusCode};

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let response = logout(MaybeUser(None)).await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
