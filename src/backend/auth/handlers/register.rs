/**
 * Registration Handlers
 *
 * `GET /auth/register` renders the form, `POST /auth/register` creates the
 * account and logs the new user in.
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, letters/digits/underscore
 * - Email must contain '@' (basic validation)
 * - Password must be at least 8 characters long
 * - Username and email must both be unused
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::handlers::login::start_session;
use crate::backend::auth::handlers::types::RegisterForm;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiForm;
use crate::backend::server::state::AppState;
use crate::backend::views::auth::register_page;
use crate::shared::SharedError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check a registration form before touching the database
pub fn validate_registration(form: &RegisterForm) -> Result<(), SharedError> {
    if !is_valid_username(&form.username) {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !form.email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }

    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    Ok(())
}

/// Render the registration form
pub async fn register_form() -> Html<String> {
    Html(register_page(None, "", "").into_string())
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - form page with the validation message
/// * `409 Conflict` - form page, username or email already taken
/// * `500 Internal Server Error` - database, hashing or signing failure
pub async fn register(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<RegisterForm>,
) -> Result<Response, BackendError> {
    tracing::info!("Register request for username: {}", form.username);

    if let Err(err) = validate_registration(&form) {
        tracing::warn!("Invalid registration: {}", err);
        return Ok(form_error(StatusCode::BAD_REQUEST, err.user_message(), &form));
    }

    if get_user_by_username(&state.db, &form.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", form.username);
        return Ok(form_error(StatusCode::CONFLICT, "Username already taken", &form));
    }

    if get_user_by_email(&state.db, &form.email).await?.is_some() {
        tracing::warn!("Email already registered, requested by {}", form.username);
        return Ok(form_error(StatusCode::CONFLICT, "Email already registered", &form));
    }

    let password_hash = hash(&form.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal("Failed to hash password")
    })?;

    let user = match create_user(&state.db, &form.username, &form.email, &password_hash).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Duplicate registration for {}: {:?}", form.username, db_err);
            return Ok(form_error(
                StatusCode::CONFLICT,
                "Username or email already registered",
                &form,
            ));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User created successfully: {} ({})", user.username, user.id);
    start_session(&state.sessions, user.id, &user.username)
}

fn form_error(status: StatusCode, message: &str, form: &RegisterForm) -> Response {
    (
        status,
        Html(register_page(Some(message), &form.username, &form.email).into_string()),
    )
        .into_response()
}
