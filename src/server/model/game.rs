//! Game domain model, operation inputs, and field validation.
//!
//! Validation is an explicit function over [`GameInput`] rather than a side effect of
//! persisting, so the repository only ever receives a [`ValidGame`]. All violated
//! fields are reported together.

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::model::game::{GameDto, GamePayloadDto};

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i64 = 1950;

/// How many years past the current one a release may be announced for.
pub const MAX_YEARS_AHEAD: i64 = 5;

/// A stored game record.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub release_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            platform: entity.platform,
            release_year: entity.release_year,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            release_year: self.release_year,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One client-supplied field before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldInput<T> {
    /// Omitted from the payload.
    #[default]
    Absent,
    /// Explicit `null`. Never filled from a stored record, so it fails
    /// validation on update exactly as on create.
    Null,
    /// Present but of a JSON type that cannot be read as `T`.
    Malformed,
    Present(T),
}

impl<T> FieldInput<T> {
    /// Keeps `self` unless it is absent, in which case `fallback` is used.
    fn or_present(self, fallback: T) -> Self {
        match self {
            Self::Absent => Self::Present(fallback),
            other => other,
        }
    }

    fn is_supplied(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl FieldInput<String> {
    /// Reads a string, taking numbers and booleans in their JSON text form.
    fn from_json(value: Option<Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::String(s)) => Self::Present(s),
            Some(Value::Number(n)) => Self::Present(n.to_string()),
            Some(Value::Bool(b)) => Self::Present(b.to_string()),
            Some(_) => Self::Malformed,
        }
    }
}

impl FieldInput<i64> {
    /// Reads an integer from a JSON number or a string holding an integer.
    fn from_json(value: Option<Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Self::Present(i),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        Self::Present(f as i64)
                    }
                    _ => Self::Malformed,
                },
            },
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Self::Present(i),
                Err(_) => Self::Malformed,
            },
            Some(_) => Self::Malformed,
        }
    }
}

/// Candidate game fields as received from a client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameInput {
    pub title: FieldInput<String>,
    pub genre: FieldInput<String>,
    pub platform: FieldInput<String>,
    pub release_year: FieldInput<i64>,
}

impl GameInput {
    /// Converts the request DTO into validation input.
    pub fn from_dto(dto: GamePayloadDto) -> Self {
        Self {
            title: FieldInput::<String>::from_json(dto.title),
            genre: FieldInput::<String>::from_json(dto.genre),
            platform: FieldInput::<String>::from_json(dto.platform),
            release_year: FieldInput::<i64>::from_json(dto.release_year),
        }
    }

    /// Fills every absent field with the stored value of `existing`.
    ///
    /// Present and malformed fields are kept so the merged candidate is
    /// validated exactly like a new record.
    pub fn merged_over(self, existing: &Game) -> Self {
        Self {
            title: self.title.or_present(existing.title.clone()),
            genre: self.genre.or_present(existing.genre.clone()),
            platform: self.platform.or_present(existing.platform.clone()),
            release_year: self.release_year.or_present(existing.release_year as i64),
        }
    }
}

/// Game fields that satisfy every constraint, with strings trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGame {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub release_year: i32,
}

/// Validated fields a client asked to change.
///
/// `None` leaves the stored column untouched, so concurrent updates of
/// different fields do not overwrite each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameChanges {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
}

impl GameChanges {
    /// Keeps the validated value of every field present in `input`.
    pub fn supplied(input: &GameInput, valid: ValidGame) -> Self {
        Self {
            title: input.title.is_supplied().then_some(valid.title),
            genre: input.genre.is_supplied().then_some(valid.genre),
            platform: input.platform.is_supplied().then_some(valid.platform),
            release_year: input.release_year.is_supplied().then_some(valid.release_year),
        }
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// JSON name of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn required_string(
    input: &FieldInput<String>,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match input {
        FieldInput::Present(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        FieldInput::Malformed => {
            errors.push(FieldError::new(field, format!("{} must be a string", label)));
            None
        }
        _ => {
            errors.push(FieldError::new(field, format!("{} is required", label)));
            None
        }
    }
}

fn release_year(
    input: &FieldInput<i64>,
    current_year: i32,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    let max_year = current_year as i64 + MAX_YEARS_AHEAD;

    match *input {
        FieldInput::Absent | FieldInput::Null => {
            errors.push(FieldError::new("releaseYear", "Release year is required"));
            None
        }
        FieldInput::Malformed => {
            errors.push(FieldError::new(
                "releaseYear",
                "Release year must be an integer",
            ));
            None
        }
        FieldInput::Present(year) if year < MIN_RELEASE_YEAR => {
            errors.push(FieldError::new(
                "releaseYear",
                format!("Release year must be {} or later", MIN_RELEASE_YEAR),
            ));
            None
        }
        FieldInput::Present(year) if year > max_year => {
            errors.push(FieldError::new(
                "releaseYear",
                format!("Release year cannot be later than {}", max_year),
            ));
            None
        }
        FieldInput::Present(year) => Some(year as i32),
    }
}

/// Validates a candidate game against `current_year`.
///
/// # Arguments
/// - `input` - Candidate fields
/// - `current_year` - Year the upper release bound is computed from
///
/// # Returns
/// - `Ok(ValidGame)` - Every field present and in range, strings trimmed
/// - `Err(Vec<FieldError>)` - Every violated field, in title, genre, platform,
///   releaseYear order
pub fn validate_game(input: &GameInput, current_year: i32) -> Result<ValidGame, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = required_string(&input.title, "title", "Title", &mut errors);
    let genre = required_string(&input.genre, "genre", "Genre", &mut errors);
    let platform = required_string(&input.platform, "platform", "Platform", &mut errors);
    let release_year = release_year(&input.release_year, current_year, &mut errors);

    match (title, genre, platform, release_year) {
        (Some(title), Some(genre), Some(platform), Some(release_year)) if errors.is_empty() => {
            Ok(ValidGame {
                title,
                genre,
                platform,
                release_year,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a candidate game against the current UTC year.
pub fn validate_game_now(input: &GameInput) -> Result<ValidGame, Vec<FieldError>> {
    validate_game(input, Utc::now().year())
}
