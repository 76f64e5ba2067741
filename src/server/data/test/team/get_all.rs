use super::*;

/// Tests that teams are listed alphabetically by name.
///
/// Expected: Ok with teams sorted by name regardless of insert order
#[tokio::test]
async fn returns_teams_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();

    for (name, nickname) in [
        ("Winnipeg Jets", "jets"),
        ("Anaheim Ducks", "ducks"),
        ("Nashville Predators", "predators"),
    ] {
        factory::team::TeamFactory::new(&test.db)
            .name(name)
            .nickname(nickname)
            .build()
            .await?;
    }

    let teams = TeamRepository::new(&test.db).get_all().await?;
    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Anaheim Ducks", "Nashville Predators", "Winnipeg Jets"]
    );

    Ok(())
}

#[tokio::test]
async fn returns_empty_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();

    let teams = TeamRepository::new(&test.db).get_all().await?;

    assert!(teams.is_empty());

    Ok(())
}
