use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::model::game::FieldError;

/// Outcome of a failed game data operation.
///
/// Produced by the game service from validation results and store errors so the
/// terminal error handler can classify failures by matching on the variant.
#[derive(Error, Debug)]
pub enum GameError {
    /// No game has the requested id.
    ///
    /// Results in 404 Not Found.
    #[error("Game not found")]
    NotFound,

    /// One or more fields violate their constraints.
    ///
    /// Results in 400 Bad Request listing every message.
    #[error("Validation failed: {}", join_messages(.0))]
    ValidationFailed(Vec<FieldError>),

    /// The store rejected a duplicate value for a unique column.
    ///
    /// Results in 400 Bad Request naming the column.
    #[error("A record with this {0} already exists")]
    Conflict(String),

    /// Any other store failure.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    Unknown(DbErr),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classifies store errors.
///
/// Unique violations become `Conflict` with the column parsed from the driver
/// message, missing rows become `NotFound`, everything else is `Unknown`.
impl From<DbErr> for GameError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            return GameError::Conflict(conflicting_field(&message));
        }

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => GameError::NotFound,
            err => GameError::Unknown(err),
        }
    }
}

/// Extracts the column name from a unique violation message.
///
/// Understands SQLite (`UNIQUE constraint failed: game.title`) and Postgres
/// (`... Key (title)=(...) already exists`) wording.
pub(crate) fn conflicting_field(message: &str) -> String {
    if let Some((_, columns)) = message.split_once("constraint failed:") {
        if let Some(first) = columns.split(',').next() {
            let column = first.trim();
            let column = column.rsplit('.').next().unwrap_or(column);
            if !column.is_empty() {
                return column.to_string();
            }
        }
    }

    if let Some((_, rest)) = message.split_once("Key (") {
        if let Some((column, _)) = rest.split_once(')') {
            return column.to_string();
        }
    }

    "field".to_string()
}
