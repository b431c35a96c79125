// ABOUTME: Error types for login and registration
// ABOUTME: Every variant is a recoverable validation outcome surfaced to the user

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingFields,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid auth mode: {0}")]
    InvalidMode(String),
}
