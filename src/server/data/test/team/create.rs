use super::*;

/// Tests creating a team.
///
/// Expected: Ok with name and nickname stored
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();

    let team = TeamRepository::new(&test.db)
        .create("Nashville Predators".to_string(), "predators".to_string())
        .await?;

    assert_eq!(team.name, "Nashville Predators");
    assert_eq!(team.nickname, "predators");
    assert_eq!(team.players_path(), "/teams/predators/players/");

    Ok(())
}

/// Tests that nicknames are unique.
///
/// Expected: Err on the second insert with the same nickname
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let repo = TeamRepository::new(&test.db);

    repo.create("Nashville Predators".to_string(), "predators".to_string())
        .await?;
    let result = repo
        .create("Other Predators".to_string(), "predators".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
