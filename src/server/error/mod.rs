//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every failed request is classified in exactly one place.

pub mod config;
pub mod game;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, game::GameError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Game data operation error.
    ///
    /// Status depends on the variant: validation and conflicts are 400, missing
    /// games 404, store failures 500.
    #[error(transparent)]
    GameErr(#[from] GameError),

    /// Database operation error from SeaORM outside of game operations
    /// (connecting, migrating).
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was not acceptable JSON.
    ///
    /// Results in the status chosen by axum for the rejection (400, 415 or 422).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Identifier path segment is not a well-formed game id.
    ///
    /// Results in 400 Bad Request. Raised before any store access.
    #[error("Invalid id '{0}'")]
    InvalidId(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Undecodable path parameters can only come from the id segment.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidId(rejection.body_text())
    }
}

/// Source chain of the error behind a failed response.
///
/// Attached to the response extensions by `AppError::into_response`. The
/// terminal error handler middleware moves it into the body in development
/// mode and drops it otherwise.
#[derive(Debug, Clone)]
pub struct ErrorTrace(pub String);

impl ErrorTrace {
    pub fn capture(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut lines = vec![format!("{:?}", err)];
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self(lines.join("\n"))
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new("Internal server error")),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// Every error is logged before it is classified. Internal errors return a
/// generic message to avoid leaking implementation details.
///
/// # Returns
/// - 400 Bad Request - Validation failures, conflicts, and invalid ids
/// - 404 Not Found - `NotFound` and `GameError::NotFound`
/// - 400/415/422 - Malformed JSON bodies, as reported by the rejection
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let trace = ErrorTrace::capture(&self);

        let mut response = match self {
            Self::GameErr(GameError::ValidationFailed(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_errors(
                    "Validation failed",
                    errors.into_iter().map(|e| e.message).collect(),
                )),
            )
                .into_response(),
            Self::GameErr(GameError::Conflict(field)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(format!(
                    "A record with this {} already exists",
                    field
                ))),
            )
                .into_response(),
            Self::GameErr(GameError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("Game not found")),
            )
                .into_response(),
            Self::InvalidId(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("Invalid id"))).into_response()
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::JsonRejection(rejection) => {
                (rejection.status(), Json(ErrorDto::new(rejection.body_text()))).into_response()
            }
            Self::GameErr(GameError::Unknown(_))
            | Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::IoErr(_) => internal_server_error(),
        };

        response.extensions_mut().insert(trace);
        response
    }
}
