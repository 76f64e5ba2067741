use super::*;

#[tokio::test]
async fn gets_roster_by_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    factory::create_team_with_numbers(&test.db, "predators", &[91, 33]).await?;

    let (team, players) = PlayerService::new(&test.db)
        .get_by_team_nickname("predators")
        .await?;

    assert_eq!(team.nickname, "predators");
    assert_eq!(
        players.iter().map(|p| p.jersey_number).collect::<Vec<_>>(),
        vec![33, 91]
    );

    Ok(())
}

#[tokio::test]
async fn unknown_nickname_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();

    let result = PlayerService::new(&test.db)
        .get_by_team_nickname("nope")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a player is returned with the team they actually belong to.
///
/// Expected: Ok with the player's own team
#[tokio::test]
async fn gets_player_with_actual_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;
    let (islanders, players) =
        factory::create_team_with_numbers(&test.db, "islanders", &[27]).await?;

    let (player, team) = PlayerService::new(&test.db)
        .get_with_team(players[0].id)
        .await?;

    assert_eq!(player.jersey_number, 27);
    assert_eq!(team.id, islanders.id);

    Ok(())
}

#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();

    let result = PlayerService::new(&test.db).get_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
