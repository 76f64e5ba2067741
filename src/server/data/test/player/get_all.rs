use super::*;

#[tokio::test]
async fn returns_every_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    factory::create_team_with_numbers(&test.db, "predators", &[33, 9]).await?;
    factory::create_team_with_numbers(&test.db, "islanders", &[27]).await?;

    let players = PlayerRepository::new(&test.db).get_all().await?;

    assert_eq!(players.len(), 3);

    Ok(())
}
