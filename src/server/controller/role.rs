use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        role::{CreateRoleDto, RoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::role::Role,
        service::role::RoleService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Create a role.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db).create(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

/// List all roles.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let roles = RoleService::new(&state.db).get_all().await?;
    let roles_dto: Vec<RoleDto> = roles.into_iter().map(Role::into_dto).collect();

    Ok((StatusCode::OK, Json(roles_dto)))
}

/// Delete a role, removing it from every user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/roles/{role_id}",
    tag = ROLE_TAG,
    params(
        ("role_id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    session: Session,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RoleService::new(&state.db).delete(role_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
