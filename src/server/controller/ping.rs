use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static PING_TAG: &str = "ping";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = PING_TAG,
    responses(
        (status = 200, description = "Server is up", body = MessageDto)
    ),
)]
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "pong".to_string(),
        }),
    )
}
