//! Shared helper utilities for factory methods.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` games whose creation times are one minute apart.
///
/// The first game returned is the oldest. Timestamps are set explicitly so
/// ordering assertions do not depend on clock resolution.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of games to insert
///
/// # Returns
/// - `Ok(Vec<entity::game::Model>)` - Created games, oldest first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_games(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::game::Model>, DbErr> {
    let base = Utc::now() - Duration::minutes(count as i64);
    let mut games = Vec::with_capacity(count);

    for i in 0..count {
        let game = crate::factory::game::GameFactory::new(db)
            .created_at(base + Duration::minutes(i as i64))
            .build()
            .await?;
        games.push(game);
    }

    Ok(games)
}
