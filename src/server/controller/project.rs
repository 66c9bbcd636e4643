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
        project::{ProjectDetailDto, ProjectDto, ProjectInputDto, ProjectUserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::project::{Project, ProjectParams},
        service::project::ProjectService,
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Create a project.
///
/// A project ties users to an order document kind (`vid_doc`); members see orders of
/// that kind in their order list.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Project created
/// - `400 Bad Request` - Name is blank
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = ProjectInputDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Name is blank", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ProjectInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ProjectParams::from_dto(payload)?;
    let project = ProjectService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// List all projects.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let projects: Vec<ProjectDto> = ProjectService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Project::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a project with its users.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project with users", body = ProjectDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let project = ProjectService::new(&state.db).get(project_id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Update a project's name and document kind.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = ProjectInputDto,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 400, description = "Name is blank", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<ProjectInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ProjectParams::from_dto(payload)?;
    let project = ProjectService::new(&state.db)
        .update(project_id, params)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project and its memberships.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProjectService::new(&state.db).delete(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to a project.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/users",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = ProjectUserDto,
    responses(
        (status = 204, description = "User added"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Project or user not found", body = ErrorDto),
        (status = 409, description = "User already in project", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_project_user(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<ProjectUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProjectService::new(&state.db)
        .add_user(project_id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a user from a project.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/users/{user_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User removed"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not in project", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_project_user(
    State(state): State<AppState>,
    session: Session,
    Path((project_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProjectService::new(&state.db)
        .remove_user(project_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
