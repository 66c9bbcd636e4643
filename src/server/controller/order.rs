use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bulk::BulkResponseDto,
        order::{AssignCollectorDto, CheckOrderDto, CreateOrderDto, OrderDto},
    },
    server::{
        controller::param::{CheckedParam, OrderListParam, RangeParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{
            AssignCollectorParams, CheckOrderParams, CreateOrderParams, DateRange, Order,
            OrderFilter,
        },
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

fn orders_dto(orders: Vec<Order>) -> Vec<OrderDto> {
    orders.into_iter().map(Order::into_dto).collect()
}

/// Import a batch of orders.
///
/// Items are inserted concurrently under the configured batch deadline. Items not
/// confirmed when the deadline elapses are cancelled and reported with kind `timeout`;
/// such an item may still have been written if the cancellation arrived after commit.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - All orders stored (also for an empty batch)
/// - `207 Multi-Status` - Some stored, some failed
/// - `422 Unprocessable Entity` - No order stored
/// - `504 Gateway Timeout` - Deadline elapsed; both lists enumerated
/// - `400 Bad Request` - Batch too large or an `order_uid` is not positive
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = Vec<CreateOrderDto>,
    responses(
        (status = 201, description = "All orders created", body = BulkResponseDto<OrderDto, CreateOrderDto>),
        (status = 207, description = "Some orders created", body = BulkResponseDto<OrderDto, CreateOrderDto>),
        (status = 422, description = "No order created", body = BulkResponseDto<OrderDto, CreateOrderDto>),
        (status = 504, description = "Batch deadline elapsed", body = BulkResponseDto<OrderDto, CreateOrderDto>),
        (status = 400, description = "Invalid batch", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_orders(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<CreateOrderDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = payload
        .into_iter()
        .map(CreateOrderParams::from_dto)
        .collect();
    let outcome = OrderService::new(&state.db)
        .create_bulk(&state.bulk, items)
        .await?;

    let status = outcome.status().status_code(StatusCode::CREATED);

    Ok((
        status,
        Json(outcome.into_dto(Order::into_dto, CreateOrderParams::into_dto)),
    ))
}

/// List orders, optionally filtered by date range and keeper.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("start" = Option<String>, Query, description = "First order date (YYYY-MM-DD), requires finish"),
        ("finish" = Option<String>, Query, description = "Last order date (YYYY-MM-DD), requires start"),
        ("user_id" = Option<i32>, Query, description = "Keeper user ID")
    ),
    responses(
        (status = 200, description = "Matching orders", body = Vec<OrderDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<OrderListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = OrderFilter {
        range: DateRange::from_optional(params.start, params.finish)?,
        user_id: params.user_id,
    };
    let orders = OrderService::new(&state.db).get_filtered(filter).await?;

    Ok((StatusCode::OK, Json(orders_dto(orders))))
}

/// Get an order by id.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db).get_by_id(order_id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Get an order by its upstream uid.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/orders/uid/{order_uid}",
    tag = ORDER_TAG,
    params(
        ("order_uid" = i64, Path, description = "Upstream order uid")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_uid(
    State(state): State<AppState>,
    session: Session,
    Path(order_uid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db).get_by_uid(order_uid).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Assign collectors and keepers to a batch of orders.
///
/// Each item is applied independently. An unknown `order_uid`, employee or user fails
/// only that item. The `done` flag is not changed.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - All assignments applied
/// - `207 Multi-Status` - Some applied, some failed
/// - `422 Unprocessable Entity` - None applied
#[utoipa::path(
    put,
    path = "/api/orders/collector",
    tag = ORDER_TAG,
    request_body = Vec<AssignCollectorDto>,
    responses(
        (status = 200, description = "All assignments applied", body = BulkResponseDto<OrderDto, AssignCollectorDto>),
        (status = 207, description = "Some assignments applied", body = BulkResponseDto<OrderDto, AssignCollectorDto>),
        (status = 422, description = "No assignment applied", body = BulkResponseDto<OrderDto, AssignCollectorDto>),
        (status = 400, description = "Invalid batch", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_collectors(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<AssignCollectorDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = payload
        .into_iter()
        .map(AssignCollectorParams::from_dto)
        .collect();
    let outcome = OrderService::new(&state.db)
        .assign_collectors(&state.bulk, items)
        .await?;

    let status = outcome.status().status_code(StatusCode::OK);

    Ok((
        status,
        Json(outcome.into_dto(Order::into_dto, AssignCollectorParams::into_dto)),
    ))
}

/// Record check results for a batch of orders.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - All results recorded
/// - `207 Multi-Status` - Some recorded, some failed
/// - `422 Unprocessable Entity` - None recorded
#[utoipa::path(
    put,
    path = "/api/orders/check",
    tag = ORDER_TAG,
    request_body = Vec<CheckOrderDto>,
    responses(
        (status = 200, description = "All results recorded", body = BulkResponseDto<OrderDto, CheckOrderDto>),
        (status = 207, description = "Some results recorded", body = BulkResponseDto<OrderDto, CheckOrderDto>),
        (status = 422, description = "No result recorded", body = BulkResponseDto<OrderDto, CheckOrderDto>),
        (status = 400, description = "Invalid batch", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_orders(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<CheckOrderDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = payload
        .into_iter()
        .map(CheckOrderParams::from_dto)
        .collect();
    let outcome = OrderService::new(&state.db)
        .check(&state.bulk, items)
        .await?;

    let status = outcome.status().status_code(StatusCode::OK);

    Ok((
        status,
        Json(outcome.into_dto(Order::into_dto, CheckOrderParams::into_dto)),
    ))
}

/// Orders in range that have a collector assigned.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/orders/assembly",
    tag = ORDER_TAG,
    params(
        ("start" = String, Query, description = "First order date (YYYY-MM-DD)"),
        ("finish" = String, Query, description = "Last order date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Orders being assembled", body = Vec<OrderDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assembly(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let range = DateRange::new(params.start, params.finish)?;
    let orders = OrderService::new(&state.db).get_assembly(range).await?;

    Ok((StatusCode::OK, Json(orders_dto(orders))))
}

/// Orders in range with the given checked state.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/orders/checked",
    tag = ORDER_TAG,
    params(
        ("start" = String, Query, description = "First order date (YYYY-MM-DD)"),
        ("finish" = String, Query, description = "Last order date (YYYY-MM-DD)"),
        ("check" = Option<bool>, Query, description = "Checked state to list (default: true)")
    ),
    responses(
        (status = 200, description = "Orders with the requested state", body = Vec<OrderDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_checked(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CheckedParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let range = DateRange::new(params.start, params.finish)?;
    let orders = OrderService::new(&state.db)
        .get_checked(range, params.check)
        .await?;

    Ok((StatusCode::OK, Json(orders_dto(orders))))
}

/// Orders in range visible to the current user through their projects.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/user/orders",
    tag = ORDER_TAG,
    params(
        ("start" = String, Query, description = "First order date (YYYY-MM-DD)"),
        ("finish" = String, Query, description = "Last order date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Orders of the user's document kinds", body = Vec<OrderDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let range = DateRange::new(params.start, params.finish)?;
    let orders = OrderService::new(&state.db)
        .get_for_user(user.id, range)
        .await?;

    Ok((StatusCode::OK, Json(orders_dto(orders))))
}
