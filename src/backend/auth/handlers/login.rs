/**
 * Login Handlers
 *
 * `GET /auth/login` renders the form, `POST /auth/login` checks the
 * credentials and starts a session.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Sign a session cookie carrying the user id and username
 * 4. Redirect to the home page
 *
 * # Security
 *
 * - Unknown username and wrong password get the same 401 page
 * - Passwords are never logged
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use bcrypt::verify;
use uuid::Uuid;

use crate::backend::auth::handlers::types::LoginForm;
use crate::backend::auth::sessions::{session_cookie, SessionKeys};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiForm;
use crate::backend::server::state::AppState;
use crate::backend::views::auth::login_page;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Render the login form
pub async fn login_form() -> Html<String> {
    Html(login_page(None, "").into_string())
}

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - login page with an error, if the user is unknown
///   or the password is wrong
/// * `500 Internal Server Error` - database, hashing or signing failure
pub async fn login(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<Response, BackendError> {
    tracing::info!("Login request for: {}", form.username);

    let Some(user) = get_user_by_username(&state.db, &form.username).await? else {
        tracing::warn!("User not found: {}", form.username);
        return Ok(rejected(&form.username));
    };

    let valid = verify(&form.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::internal("Password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", form.username);
        return Ok(rejected(&form.username));
    }

    tracing::info!("User logged in successfully: {}", user.username);
    start_session(&state.sessions, user.id, &user.username)
}

fn rejected(username: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Html(login_page(Some(INVALID_CREDENTIALS), username).into_string()),
    )
        .into_response()
}

/// Set the session cookie and send the browser home
pub(crate) fn start_session(
    keys: &SessionKeys,
    user_id: Uuid,
    username: &str,
) -> Result<Response, BackendError> {
    let token = keys.issue(user_id, username).map_err(|e| {
        tracing::error!("Failed to sign session: {:?}", e);
        BackendError::internal("Failed to sign session")
    })?;

    Ok(([(SET_COOKIE, session_cookie(&token))], Redirect::to("/")).into_response())
}
