use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session, the client is not logged in.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    #[error("User ID {0} not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password mismatch during login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user exists but has been blocked by an admin.
    #[error("User {0} is blocked")]
    UserBlocked(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `UserBlocked` / `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::UserBlocked(_) => (StatusCode::FORBIDDEN, "User is blocked"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
