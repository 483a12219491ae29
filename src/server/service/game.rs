use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::game::GameRepository,
    error::game::GameError,
    model::game::{validate_game_now, Game, GameChanges, GameInput},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new game
    pub async fn create(&self, input: GameInput) -> Result<Game, GameError> {
        let repo = GameRepository::new(self.db);

        let valid = validate_game_now(&input).map_err(GameError::ValidationFailed)?;

        let game = repo.create(valid).await?;

        Ok(Game::from_entity(game))
    }

    /// Gets every game, newest first
    pub async fn get_all(&self) -> Result<Vec<Game>, GameError> {
        let repo = GameRepository::new(self.db);

        let games = repo.get_all().await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Game, GameError> {
        let repo = GameRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .map(Game::from_entity)
            .ok_or(GameError::NotFound)
    }

    /// Updates a game with the supplied fields.
    ///
    /// Fields missing from `input` keep their stored value; the merged result
    /// is validated exactly like a new game. Only the supplied fields are
    /// written, so a concurrent update of other fields is never overwritten.
    ///
    /// # Returns
    /// - `Ok(Game)` - The game as stored after the update
    /// - `Err(GameError::NotFound)` - No game has the id, including when it is
    ///   deleted between the read and the write
    /// - `Err(GameError::ValidationFailed)` - The merged fields are invalid
    pub async fn update(&self, id: Uuid, input: GameInput) -> Result<Game, GameError> {
        let repo = GameRepository::new(self.db);

        let existing = repo.get_by_id(id).await?.ok_or(GameError::NotFound)?;
        let created_at = existing.created_at;

        let merged = input.clone().merged_over(&Game::from_entity(existing));
        let valid = validate_game_now(&merged).map_err(GameError::ValidationFailed)?;

        let game = repo
            .update(id, created_at, GameChanges::supplied(&input, valid))
            .await?;

        Ok(Game::from_entity(game))
    }

    /// Deletes a game and returns its last stored state
    pub async fn delete(&self, id: Uuid) -> Result<Game, GameError> {
        let repo = GameRepository::new(self.db);

        repo.delete(id)
            .await?
            .map(Game::from_entity)
            .ok_or(GameError::NotFound)
    }
}
