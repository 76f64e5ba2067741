use super::*;

/// Tests adding a player with a taken number and then a free one.
///
/// Verifies the taken number is rejected without a new row, and the free
/// number is stored on the team.
///
/// Expected: Err(JerseyNumberTaken(33)), then Ok with number 91
#[tokio::test]
async fn rejects_taken_number_then_accepts_free_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, _) = factory::create_team_with_numbers(&test.db, "predators", &[33]).await?;
    let team = Team::from_entity(team);
    let service = PlayerService::new(&test.db);

    let result = service
        .create(&team, None, &submission("Mike Fisher", "Center", "33"))
        .await;

    match result {
        Err(AppError::PlayerErr(err)) => {
            assert_eq!(err, PlayerError::JerseyNumberTaken(33));
            assert!(err.to_string().contains("Jersey number 33 is already taken"));
        }
        other => panic!("expected taken error, got {:?}", other),
    }
    assert_eq!(player_count(&test.db).await?, 1);

    let player = service
        .create(&team, None, &submission("Mike Fisher", "Center", "91"))
        .await?;

    assert_eq!(player.jersey_number, 91);
    assert_eq!(player.team_id, team.id);
    assert_eq!(team.players_path(), "/teams/predators/players/");
    assert_eq!(player_count(&test.db).await?, 2);

    Ok(())
}

/// Tests that an empty name is rejected and nothing is stored.
///
/// Expected: Err(EmptyName), no rows
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = Team::from_entity(factory::create_team(&test.db).await?);

    let result = PlayerService::new(&test.db)
        .create(&team, None, &submission("   ", "Center", "12"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::EmptyName))
    ));
    assert_eq!(player_count(&test.db).await?, 0);

    Ok(())
}

/// Tests that the number is checked before the name.
///
/// Expected: Err(InvalidJerseyNumber) when both are bad
#[tokio::test]
async fn reports_number_before_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = Team::from_entity(factory::create_team(&test.db).await?);

    let result = PlayerService::new(&test.db)
        .create(&team, None, &submission("", "", "abc"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::InvalidJerseyNumber(
            InvalidJerseyNumber::NotAnInteger
        )))
    ));

    Ok(())
}

/// Tests that markup in submitted text is stored as typed, trimmed.
///
/// Pages escape on output, so the stored value is the plain text.
///
/// Expected: Ok with the raw name and position
#[tokio::test]
async fn stores_markup_as_typed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = Team::from_entity(factory::create_team(&test.db).await?);

    let player = PlayerService::new(&test.db)
        .create(
            &team,
            None,
            &submission("<b>Shea</b> Weber", " D & C ", "6"),
        )
        .await?;

    assert_eq!(player.name, "<b>Shea</b> Weber");
    assert_eq!(player.position, "D & C");

    Ok(())
}

/// Tests the store's unique index error on a migrated schema.
///
/// Inserts the same number twice through the repository, bypassing the roster
/// check, and maps the store error the way create and update do.
///
/// Expected: Err(JerseyNumberTaken(33))
#[tokio::test]
async fn maps_unique_index_violation_to_taken() -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    let test = TestBuilder::new().build().await.unwrap();
    Migrator::up(&test.db, None).await?;
    let team = factory::create_team(&test.db).await?;
    let repo = PlayerRepository::new(&test.db);

    let params = CreatePlayerParams {
        team_id: team.id,
        user_id: None,
        name: "Viktor Arvidsson".to_string(),
        position: "Right Wing".to_string(),
        jersey_number: 33,
    };
    repo.create(params.clone()).await?;
    let err = repo.create(params).await.unwrap_err();

    assert!(matches!(
        unique_violation_as_taken(err, 33),
        AppError::PlayerErr(PlayerError::JerseyNumberTaken(33))
    ));
    assert_eq!(player_count(&test.db).await?, 1);

    Ok(())
}

/// Tests that other store errors are passed through unchanged.
///
/// Expected: AppError::DbErr
#[tokio::test]
async fn passes_other_store_errors_through() {
    let err = unique_violation_as_taken(sea_orm::DbErr::RecordNotInserted, 33);

    assert!(matches!(err, AppError::DbErr(_)));
}

/// Tests that the logged-in user is recorded as owner.
///
/// Expected: Ok with user_id set
#[tokio::test]
async fn records_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = Team::from_entity(factory::create_team(&test.db).await?);
    let user = factory::create_user(&test.db).await?;

    let player = PlayerService::new(&test.db)
        .create(&team, Some(user.id), &submission("Filip Forsberg", "Left Wing", "9"))
        .await?;

    assert_eq!(player.user_id, Some(user.id));

    Ok(())
}
