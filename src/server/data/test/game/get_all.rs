use super::*;

/// Tests getting games from an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_vec_when_no_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    assert!(games.is_empty());

    Ok(())
}

/// Tests games are returned newest first.
///
/// Expected: Ok with games in reverse creation order
#[tokio::test]
async fn orders_by_created_at_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_games(db, 3).await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    let ids: Vec<Uuid> = games.iter().map(|g| g.id).collect();
    let expected: Vec<Uuid> = created.iter().rev().map(|g| g.id).collect();
    assert_eq!(ids, expected);

    for pair in games.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    Ok(())
}
