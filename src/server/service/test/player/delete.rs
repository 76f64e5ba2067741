use super::*;

/// Tests deleting a player.
///
/// Expected: Ok with the player's team, row removed
#[tokio::test]
async fn deletes_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, players) = factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;

    let (deleted, deleted_team) = PlayerService::new(&test.db)
        .delete(players[0].id)
        .await?;

    assert_eq!(deleted.id, players[0].id);
    assert_eq!(deleted_team.id, team.id);
    assert_eq!(player_count(&test.db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown player.
///
/// Expected: Err(NotFound) and no rows removed
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;

    let result = PlayerService::new(&test.db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(player_count(&test.db).await?, 1);

    Ok(())
}
