use super::*;
use crate::server::model::player::Player;

/// Tests re-submitting a player's own number.
///
/// Expected: Ok with the number kept and the name changed
#[tokio::test]
async fn keeps_own_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (_, players) = factory::create_team_with_numbers(&test.db, "predators", &[33, 91]).await?;
    let player = Player::from_entity(players[0].clone());

    let updated = PlayerService::new(&test.db)
        .update(&player, &submission("Colin Wilson", "Center", "33"))
        .await?;

    assert_eq!(updated.jersey_number, 33);
    assert_eq!(updated.name, "Colin Wilson");

    Ok(())
}

/// Tests taking a teammate's number.
///
/// Expected: Err(JerseyNumberTaken(91)) and the player unchanged
#[tokio::test]
async fn rejects_teammates_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (_, players) = factory::create_team_with_numbers(&test.db, "predators", &[33, 91]).await?;
    let player = Player::from_entity(players[0].clone());
    let service = PlayerService::new(&test.db);

    let result = service
        .update(&player, &submission("Colin Wilson", "Center", "91"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::JerseyNumberTaken(91)))
    ));
    assert_eq!(service.get_by_id(player.id).await?, player);

    Ok(())
}

/// Tests that a blank position keeps the stored one.
///
/// Expected: Ok with the original position
#[tokio::test]
async fn keeps_position_when_blank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;
    let player = factory::player::PlayerFactory::new(&test.db, team.id, 35)
        .position("Goaltender")
        .build()
        .await?;
    let player = Player::from_entity(player);

    let updated = PlayerService::new(&test.db)
        .update(&player, &submission("Pekka Rinne", "  ", "35"))
        .await?;

    assert_eq!(updated.position, "Goaltender");

    Ok(())
}

#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (_, players) = factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;
    let player = Player::from_entity(players[0].clone());

    let result = PlayerService::new(&test.db)
        .update(&player, &submission("", "Center", "33"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::EmptyName))
    ));

    Ok(())
}

/// Tests saving the edit form unchanged several times.
///
/// Verifies names and positions with `&` and markup survive the round trip
/// through the pre-filled form without changing.
///
/// Expected: Ok with the original name and position after every save
#[tokio::test]
async fn unchanged_edits_keep_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = Team::from_entity(factory::create_team(&test.db).await?);
    let service = PlayerService::new(&test.db);

    let mut player = service
        .create(&team, None, &submission("Smith & Sons", "<i>D</i> & C", "44"))
        .await?;

    for _ in 0..3 {
        player = service
            .update(&player, &PlayerSubmission::from_player(&player))
            .await?;

        assert_eq!(player.name, "Smith & Sons");
        assert_eq!(player.position, "<i>D</i> & C");
        assert_eq!(player.jersey_number, 44);
    }

    Ok(())
}
