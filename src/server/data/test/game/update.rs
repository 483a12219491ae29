use super::*;
use chrono::{Duration, Utc};

/// Tests updating every user field of a game.
///
/// Verifies that fields are replaced, id and created_at are preserved, and
/// updated_at moves forward.
///
/// Expected: Ok with updated game
#[tokio::test]
async fn updates_game_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::game::GameFactory::new(db)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            existing.created_at,
            all_changes(ValidGame {
                title: "Final Fantasy VI".to_string(),
                genre: "JRPG".to_string(),
                platform: "SNES".to_string(),
                release_year: 1994,
            }),
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title, "Final Fantasy VI");
    assert_eq!(updated.genre, "JRPG");
    assert_eq!(updated.release_year, 1994);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at > existing.updated_at);

    // Verify the change persisted
    let db_game = entity::prelude::Game::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_game.title, "Final Fantasy VI");

    Ok(())
}

/// Tests columns without a change are left as stored.
///
/// Expected: Ok with only the platform replaced
#[tokio::test]
async fn leaves_unchanged_columns_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::game::GameFactory::new(db)
        .title("Secret of Mana")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            existing.created_at,
            GameChanges {
                platform: Some("Switch".to_string()),
                ..GameChanges::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Secret of Mana");
    assert_eq!(updated.genre, existing.genre);
    assert_eq!(updated.platform, "Switch");
    assert_eq!(updated.release_year, existing.release_year);

    Ok(())
}

/// Tests two updates prepared from the same read.
///
/// Both callers read the game before either writes, then each changes a
/// different field.
///
/// Expected: Ok with both changes stored
#[tokio::test]
async fn updates_from_same_read_do_not_overwrite_each_other() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::game::GameFactory::new(db)
        .title("Orig")
        .genre("Orig")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let read_a = repo.get_by_id(existing.id).await?.unwrap();
    let read_b = repo.get_by_id(existing.id).await?.unwrap();

    repo.update(
        read_a.id,
        read_a.created_at,
        GameChanges {
            title: Some("A-title".to_string()),
            ..GameChanges::default()
        },
    )
    .await?;
    repo.update(
        read_b.id,
        read_b.created_at,
        GameChanges {
            genre: Some("B-genre".to_string()),
            ..GameChanges::default()
        },
    )
    .await?;

    let stored = repo.get_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.title, "A-title");
    assert_eq!(stored.genre, "B-genre");

    Ok(())
}

/// Tests updated_at never precedes created_at.
///
/// Creates a game stamped in the future so the current clock is behind it.
///
/// Expected: Ok with updated_at equal to created_at
#[tokio::test]
async fn updated_at_not_before_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::game::GameFactory::new(db)
        .created_at(Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            existing.created_at,
            all_changes(valid_game("Later")),
        )
        .await?;

    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests updating a game removed after it was read.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_when_game_was_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::game::create_game(db).await?;
    entity::prelude::Game::delete_by_id(existing.id)
        .exec(db)
        .await?;

    let repo = GameRepository::new(db);
    let result = repo
        .update(
            existing.id,
            existing.created_at,
            all_changes(valid_game("Ghost")),
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
