use super::*;

/// Tests getting an existing game by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn gets_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::game::GameFactory::new(db)
        .title("Super Metroid")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let result = repo.get_by_id(created.id).await?;

    assert_eq!(result, Some(created));

    Ok(())
}

/// Tests getting a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game(db).await?;

    let repo = GameRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
