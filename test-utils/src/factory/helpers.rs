use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Next value of a process-wide counter, used to keep factory defaults unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creates a team with the given nickname and one player per jersey number.
///
/// # Returns
/// - `Ok((team, players))` - The team and its players in the order of `numbers`
/// - `Err(DbErr)` - Insert failed
pub async fn create_team_with_numbers(
    db: &DatabaseConnection,
    nickname: &str,
    numbers: &[i32],
) -> Result<(entity::team::Model, Vec<entity::player::Model>), DbErr> {
    let team = crate::factory::team::TeamFactory::new(db)
        .nickname(nickname)
        .build()
        .await?;

    let mut players = Vec::with_capacity(numbers.len());
    for number in numbers {
        players.push(crate::factory::player::create_player(db, team.id, *number).await?);
    }

    Ok((team, players))
}
