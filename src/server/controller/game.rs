use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameListResponseDto, GamePayloadDto, GameResponseDto},
    },
    server::{
        error::AppError,
        model::game::GameInput,
        service::game::GameService,
        state::AppState,
        util::{
            extract::{AppJson, AppPath},
            parse::parse_game_id,
        },
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a new game.
///
/// Validates the payload and stores a new game record. Every violated field is
/// reported in a single response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game fields (title, genre, platform, releaseYear)
///
/// # Returns
/// - `201 Created` - Successfully created game
/// - `400 Bad Request` - Invalid game data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = GamePayloadDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameResponseDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service.create(GameInput::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(GameResponseDto::with_message(
            "Game created successfully",
            game.into_dto(),
        )),
    ))
}

/// Get all games.
///
/// Returns every game, newest first, with the number of games returned.
///
/// # Returns
/// - `200 OK` - List of games
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = GameListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(GameListResponseDto::new(
            games.into_iter().map(|g| g.into_dto()).collect(),
        )),
    ))
}

/// Get a specific game by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id, checked for shape before any database access
///
/// # Returns
/// - `200 OK` - Game details
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No game has the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game id (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameResponseDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_game_id(&id)?;

    let service = GameService::new(&state.db);

    let game = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(GameResponseDto::new(game.into_dto()))))
}

/// Update a game.
///
/// Fields omitted from the payload keep their stored value; an explicit `null`
/// is rejected like a missing field on creation. The merged record is
/// validated exactly as on creation and `updatedAt` is refreshed. The id is
/// checked before the body is looked at.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id, checked for shape before any database access
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Successfully updated game
/// - `400 Bad Request` - Malformed id or invalid game data
/// - `404 Not Found` - No game has the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game id (UUID)")
    ),
    request_body = GamePayloadDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameResponseDto),
        (status = 400, description = "Malformed id or invalid game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    payload: Result<AppJson<GamePayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_game_id(&id)?;
    let AppJson(payload) = payload?;

    let service = GameService::new(&state.db);

    let game = service.update(id, GameInput::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(GameResponseDto::with_message(
            "Game updated successfully",
            game.into_dto(),
        )),
    ))
}

/// Delete a game.
///
/// Permanently removes the game and echoes its last state for confirmation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game id, checked for shape before any database access
///
/// # Returns
/// - `200 OK` - Successfully deleted game
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No game has the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game id (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = GameResponseDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_game_id(&id)?;

    let service = GameService::new(&state.db);

    let game = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(GameResponseDto::with_message(
            "Game deleted successfully",
            game.into_dto(),
        )),
    ))
}
