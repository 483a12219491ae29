use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_uuid(Game::Id))
                    .col(string(Game::Title))
                    .col(string(Game::Genre))
                    .col(string(Game::Platform))
                    .col(integer(Game::ReleaseYear))
                    .col(timestamp_with_time_zone(Game::CreatedAt))
                    .col(timestamp_with_time_zone(Game::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_game_created_at")
                    .table(Game::Table)
                    .col(Game::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Title,
    Genre,
    Platform,
    ReleaseYear,
    CreatedAt,
    UpdatedAt,
}
