use super::*;

/// Tests that a roster is returned ordered by jersey number and scoped to the team.
///
/// Expected: Ok with only the team's players, lowest number first
#[tokio::test]
async fn returns_team_players_ordered_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, _) = factory::create_team_with_numbers(&test.db, "predators", &[91, 9, 33]).await?;
    factory::create_team_with_numbers(&test.db, "islanders", &[27]).await?;

    let players = PlayerRepository::new(&test.db)
        .get_by_team_id(team.id)
        .await?;
    let numbers: Vec<_> = players.iter().map(|p| p.jersey_number).collect();

    assert_eq!(numbers, vec![9, 33, 91]);
    assert!(players.iter().all(|p| p.team_id == team.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_team_without_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;

    let players = PlayerRepository::new(&test.db)
        .get_by_team_id(team.id)
        .await?;

    assert!(players.is_empty());

    Ok(())
}
