use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub release_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a game.
///
/// Every member is kept as raw JSON so that type mismatches are reported as
/// field validation errors alongside missing fields instead of rejecting the
/// whole body. A member sent as `null` is `Some(Value::Null)`, distinct from
/// an omitted member.
#[derive(Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GamePayloadDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Chrono Trigger")]
    pub title: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "RPG")]
    pub genre: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "SNES")]
    pub platform: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>, example = 1995)]
    pub release_year: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Envelope for responses carrying a single game.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameResponseDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: GameDto,
}

impl GameResponseDto {
    pub fn new(data: GameDto) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: GameDto) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(data)
        }
    }
}

/// Envelope for the list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameListResponseDto {
    pub success: bool,
    pub count: usize,
    pub data: Vec<GameDto>,
}

impl GameListResponseDto {
    pub fn new(data: Vec<GameDto>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
