use super::*;

/// Tests inserting a player.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn creates_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;
    let user = factory::create_user(&test.db).await?;

    let player = PlayerRepository::new(&test.db)
        .create(CreatePlayerParams {
            team_id: team.id,
            user_id: Some(user.id),
            name: "Roman Josi".to_string(),
            position: "Defense".to_string(),
            jersey_number: 59,
        })
        .await?;

    assert_eq!(player.name, "Roman Josi");
    assert_eq!(player.position, "Defense");
    assert_eq!(player.jersey_number, 59);
    assert_eq!(player.team_id, team.id);
    assert_eq!(player.user_id, Some(user.id));

    let stored = entity::prelude::Player::find_by_id(player.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests inserting a player without an owning user.
///
/// Expected: Ok with `user_id` left empty
#[tokio::test]
async fn creates_player_without_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;

    let player = PlayerRepository::new(&test.db)
        .create(CreatePlayerParams {
            team_id: team.id,
            user_id: None,
            name: "Juuse Saros".to_string(),
            position: "Goaltender".to_string(),
            jersey_number: 74,
        })
        .await?;

    assert_eq!(player.user_id, None);

    Ok(())
}

/// Tests the unique index created by the migrations.
///
/// Verifies a second player with the same number on the same team is refused
/// by the store itself, independent of the service check.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn migrated_schema_rejects_duplicate_number() -> Result<(), DbErr> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::SqlErr;

    let test = TestBuilder::new().build().await.unwrap();
    Migrator::up(&test.db, None).await?;
    let team = factory::create_team(&test.db).await?;
    let repo = PlayerRepository::new(&test.db);

    let params = CreatePlayerParams {
        team_id: team.id,
        user_id: None,
        name: "Viktor Arvidsson".to_string(),
        position: "Offenceman".to_string(),
        jersey_number: 33,
    };
    repo.create(params.clone()).await?;
    let err = repo.create(params).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
