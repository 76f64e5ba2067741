use super::*;

/// Tests deleting a player.
///
/// Expected: Ok(true) and the row gone, teammates untouched
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, players) =
        factory::create_team_with_numbers(&test.db, "predators", &[33, 91]).await?;

    let deleted = PlayerRepository::new(&test.db)
        .delete(players[0].id)
        .await?;

    assert!(deleted);
    let check = entity::prelude::Player::find_by_id(players[0].id)
        .one(&test.db)
        .await?;
    assert!(check.is_none());

    let remaining = PlayerRepository::new(&test.db)
        .get_by_team_id(team.id)
        .await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

#[tokio::test]
async fn returns_false_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();

    let deleted = PlayerRepository::new(&test.db).delete(404).await?;

    assert!(!deleted);

    Ok(())
}
