use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a game id from a path segment.
///
/// Game ids are hyphenated UUIDs. Anything else is rejected here so malformed
/// ids never reach the database.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed id
/// - `Err(AppError::InvalidId)` - The segment is not a UUID
pub fn parse_game_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::try_parse(value).map_err(|_| AppError::InvalidId(value.to_string()))
}
