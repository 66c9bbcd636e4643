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
        employee::{EmployeeDto, EmployeeInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::employee::{Employee, EmployeeParams},
        service::employee::EmployeeService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Create a batch of employees.
///
/// Every item is inserted independently and concurrently. The response lists the
/// stored employees and the rejected items with the reason for each.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - All items stored (also for an empty batch)
/// - `207 Multi-Status` - Some items stored, some failed
/// - `422 Unprocessable Entity` - No item stored
/// - `400 Bad Request` - Batch too large or an item is missing a required field
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = Vec<EmployeeInputDto>,
    responses(
        (status = 201, description = "All employees created", body = BulkResponseDto<EmployeeDto, EmployeeInputDto>),
        (status = 207, description = "Some employees created", body = BulkResponseDto<EmployeeDto, EmployeeInputDto>),
        (status = 422, description = "No employee created", body = BulkResponseDto<EmployeeDto, EmployeeInputDto>),
        (status = 400, description = "Invalid batch", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employees(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<EmployeeInputDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let items = payload.into_iter().map(EmployeeParams::from_dto).collect();
    let outcome = EmployeeService::new(&state.db)
        .create_bulk(&state.bulk, items)
        .await?;

    let status = outcome.status().status_code(StatusCode::CREATED);

    Ok((
        status,
        Json(outcome.into_dto(Employee::into_dto, EmployeeParams::into_dto)),
    ))
}

/// List all employees.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let employees = EmployeeService::new(&state.db).get_all().await?;
    let employees_dto: Vec<EmployeeDto> =
        employees.into_iter().map(Employee::into_dto).collect();

    Ok((StatusCode::OK, Json(employees_dto)))
}

/// Get an employee by id.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let employee = EmployeeService::new(&state.db)
        .get_by_id(employee_id)
        .await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Get an employee by personnel code.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/employees/code/{code}",
    tag = EMPLOYEE_TAG,
    params(
        ("code" = String, Path, description = "Personnel code")
    ),
    responses(
        (status = 200, description = "Employee", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_code(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let employee = EmployeeService::new(&state.db).get_by_code(&code).await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Replace an employee's fields.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    request_body = EmployeeInputDto,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeDto),
        (status = 400, description = "Required field blank", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 409, description = "Code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
    Json(payload): Json<EmployeeInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let employee = EmployeeService::new(&state.db)
        .update(employee_id, EmployeeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Delete an employee. Orders they collected keep existing without a collector.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    EmployeeService::new(&state.db).delete(employee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
