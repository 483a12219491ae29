use axum::Json;

use crate::{
    model::api::{HealthDto, HealthRoutesDto},
    server::error::AppError,
};

/// Service status and entry points.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        success: true,
        message: "Game API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: HealthRoutesDto {
            games: "/api/games".to_string(),
        },
    })
}

/// Fallback for requests that match no route.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
