use super::*;

/// Tests deleting a game by id.
///
/// Expected: Ok(Some) with the removed row, other games kept
#[tokio::test]
async fn deletes_game_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::create_game(db).await?;
    let other = factory::game::create_game(db).await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete(game.id).await?;

    assert_eq!(deleted, Some(game.clone()));
    assert!(entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Game::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting the same game twice.
///
/// Expected: Ok(Some) then Ok(None)
#[tokio::test]
async fn second_delete_reports_nothing_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::create_game(db).await?;

    let repo = GameRepository::new(db);
    assert!(repo.delete(game.id).await?.is_some());
    assert!(repo.delete(game.id).await?.is_none());

    Ok(())
}
