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
        bulk::BulkResponseDto,
        team::{TeamDetailDto, TeamDto, TeamEmployeeDto, TeamInputDto, TeamUserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{Team, TeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a batch of teams.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - All teams created
/// - `207 Multi-Status` - Some created, some failed
/// - `422 Unprocessable Entity` - None created
/// - `400 Bad Request` - Batch too large or a name is blank
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = Vec<TeamInputDto>,
    responses(
        (status = 201, description = "All teams created", body = BulkResponseDto<TeamDto, TeamInputDto>),
        (status = 207, description = "Some teams created", body = BulkResponseDto<TeamDto, TeamInputDto>),
        (status = 422, description = "No team created", body = BulkResponseDto<TeamDto, TeamInputDto>),
        (status = 400, description = "Invalid batch", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teams(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<TeamInputDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let items = payload.into_iter().map(TeamParams::from_dto).collect();
    let outcome = TeamService::new(&state.db)
        .create_bulk(&state.bulk, items)
        .await?;

    let status = outcome.status().status_code(StatusCode::CREATED);

    Ok((
        status,
        Json(outcome.into_dto(Team::into_dto, TeamParams::into_dto)),
    ))
}

/// List all teams.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teams: Vec<TeamDto> = TeamService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Team::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get a team with its employees and users.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team with members", body = TeamDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db).get(team_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Rename a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamInputDto,
    responses(
        (status = 200, description = "Renamed team", body = TeamDto),
        (status = 400, description = "Name is blank", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<TeamInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let team = TeamService::new(&state.db)
        .rename(team_id, TeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team and its memberships.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db).delete(team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an employee to a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/employees",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamEmployeeDto,
    responses(
        (status = 204, description = "Employee added"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team or employee not found", body = ErrorDto),
        (status = 409, description = "Employee already in team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_employee(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<TeamEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .add_employee(team_id, payload.employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove an employee from a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/employees/{employee_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee removed"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not in team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team_employee(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, employee_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .remove_employee(team_id, employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/users",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamUserDto,
    responses(
        (status = 204, description = "User added"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team or user not found", body = ErrorDto),
        (status = 409, description = "User already in team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_user(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<TeamUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .add_user(team_id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a user from a team.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/users/{user_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User removed"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not in team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team_user(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db)
        .remove_user(team_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
