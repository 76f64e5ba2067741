use super::*;

/// Tests detecting a number already worn on the team.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, _) = factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;

    let taken = PlayerRepository::new(&test.db)
        .jersey_number_taken(team.id, 33, None)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests that numbers are only unique within a team.
///
/// Verifies a number worn on another team does not count as taken.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;
    let islanders = factory::team::TeamFactory::new(&test.db)
        .nickname("islanders")
        .build()
        .await?;

    let taken = PlayerRepository::new(&test.db)
        .jersey_number_taken(islanders.id, 33, None)
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests excluding the player being edited.
///
/// Verifies the player's own number is free for them, while another
/// player's number on the same team is still taken.
///
/// Expected: Ok(false) for the own number, Ok(true) for the teammate's
#[tokio::test]
async fn excludes_given_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, players) =
        factory::create_team_with_numbers(&test.db, "predators", &[33, 91]).await?;
    let repo = PlayerRepository::new(&test.db);

    assert!(
        !repo
            .jersey_number_taken(team.id, 33, Some(players[0].id))
            .await?
    );
    assert!(
        repo.jersey_number_taken(team.id, 91, Some(players[0].id))
            .await?
    );

    Ok(())
}
