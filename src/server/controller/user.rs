use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            AssignRoleDto, ChangePasswordDto, PaginatedUsersDto, PasswordResetDto,
            RegisterUserDto, SetBlockedDto, UpdateUserDto, UserDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Supplying the startup admin code grants the new account admin rights.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Invalid input or admin code
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid input or admin code", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db)
        .register(params, &state.admin_code_service)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get paginated users.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Update a user's name and contact fields.
///
/// # Access Control
/// - `Admin` for any user
/// - Logged in for the own account
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Name blank
/// - `403 Forbidden` - Editing another user without admin rights
/// - `404 Not Found` - User not found
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin or the user themself", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;
    if !current.admin && current.id != user_id {
        return Err(AuthError::AccessDenied(
            current.id,
            format!("cannot edit profile of user {}", user_id),
        )
        .into());
    }

    let params = UpdateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db)
        .update_profile(user_id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Block or unblock a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/blocked",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetBlockedDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_blocked(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetBlockedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_blocked(user_id, payload.blocked)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Reset a user's password to a random temporary one.
///
/// The temporary password is returned in this response only. The user is flagged for
/// restore until they change it.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/password/reset",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Temporary password", body = PasswordResetDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let temporary_password = UserService::new(&state.db)
        .reset_password(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PasswordResetDto { temporary_password }),
    ))
}

/// Change the current user's password.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - Password changed, restore flag cleared
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in or current password wrong
#[utoipa::path(
    put,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "New password rejected", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password changed".to_string(),
        }),
    ))
}

/// Assign a role to a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/roles",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = AssignRoleDto,
    responses(
        (status = 204, description = "Role assigned"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 409, description = "Role already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<AssignRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .add_role(user_id, payload.role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a role from a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/roles/{role_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("role_id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role removed"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User does not have the role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_role(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, role_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .remove_role(user_id, role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
