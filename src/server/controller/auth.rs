use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, UserDto, UserProfileDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials, marks the user as logged in and stores the user id in a
/// fresh session.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Logged in, returns the user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - User is blocked
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "User is blocked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
///
/// Clears the logged-in flag and deletes the session. Succeeds even without a session.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user_id) = auth_session.get_user_id().await? {
        UserService::new(&state.db).logout(user_id).await?;
    }
    auth_session.clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the current user's profile.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - User with roles, teams and projects
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is blocked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .get_profile(user.id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(user.id))?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
