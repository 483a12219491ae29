use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, HealthRoutesDto},
        game::{GameDto, GameListResponseDto, GamePayloadDto, GameResponseDto},
    },
    server::{
        controller::{
            game::{create_game, delete_game, get_game_by_id, get_games, update_game},
            health::{health, route_not_found},
        },
        middleware::{error_handler::error_handler, request_log::log_request},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Game API", description = "CRUD API for game records"),
    paths(
        crate::server::controller::health::health,
        crate::server::controller::game::create_game,
        crate::server::controller::game::get_games,
        crate::server::controller::game::get_game_by_id,
        crate::server::controller::game::update_game,
        crate::server::controller::game::delete_game,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        HealthRoutesDto,
        GameDto,
        GamePayloadDto,
        GameResponseDto,
        GameListResponseDto,
    )),
    tags(
        (name = "game", description = "Game record management"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/games", get(get_games).post(create_game))
        .route(
            "/api/games/{id}",
            get(get_game_by_id).put(update_game).delete(delete_game),
        )
        .fallback(route_not_found)
}

/// Builds the complete application: routes, middleware, and state.
///
/// Layers run outermost first: CORS, request logging, then the terminal
/// error handler wrapping every route and the fallback.
pub fn app(state: AppState) -> Router {
    router()
        .layer(middleware::from_fn_with_state(state.clone(), error_handler))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
