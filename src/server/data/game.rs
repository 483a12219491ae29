use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::game::{GameChanges, ValidGame};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game with a fresh id and both timestamps set to now.
    pub async fn create(&self, game: ValidGame) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();

        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(game.title),
            genre: ActiveValue::Set(game.genre),
            platform: ActiveValue::Set(game.platform),
            release_year: ActiveValue::Set(game.release_year),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Gets every game, newest first.
    ///
    /// Games created at the same instant are ordered by id so repeated calls
    /// return the same sequence.
    pub async fn get_all(&self) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    /// Writes the supplied changes and refreshes `updated_at` in one statement.
    ///
    /// Columns without a change are left out of the `UPDATE`, so concurrent
    /// updates of different fields all persist. `updated_at` never moves before
    /// `created_at`, even if the clock has.
    ///
    /// # Returns
    /// - `Ok(Model)` - The game as stored after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No game has the id
    pub async fn update(
        &self,
        id: Uuid,
        created_at: DateTime<Utc>,
        changes: GameChanges,
    ) -> Result<entity::game::Model, DbErr> {
        fn set_if<T: Into<sea_orm::Value>>(value: Option<T>) -> ActiveValue<T> {
            value.map_or(ActiveValue::NotSet, ActiveValue::Set)
        }

        entity::game::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: set_if(changes.title),
            genre: set_if(changes.genre),
            platform: set_if(changes.platform),
            release_year: set_if(changes.release_year),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now().max(created_at)),
        }
        .update(self.db)
        .await
    }

    /// Deletes a game by id and returns the removed row.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The game as it was before removal
    /// - `Ok(None)` - No game had the id
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::delete_by_id(id)
            .exec_with_returning(self.db)
            .await
    }
}
