/**
 * Authentication Handler Types
 *
 * Form payloads posted by the login and registration pages.
 */

use serde::Deserialize;

/// Registration form
#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login form
#[derive(Deserialize, Debug)]
pub struct LoginForm {
    /// Username
    pub username: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}
