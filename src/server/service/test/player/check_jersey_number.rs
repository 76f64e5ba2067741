use super::*;

/// Tests that every free number in range is accepted.
///
/// Expected: Valid(n) for 1..=99 on an empty team
#[tokio::test]
async fn accepts_free_numbers_in_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;
    let service = PlayerService::new(&test.db);

    for n in 1..=99 {
        let check = service
            .check_jersey_number(&n.to_string(), team.id, None)
            .await?;
        assert_eq!(check, JerseyNumberCheck::Valid(n));
    }

    Ok(())
}

/// Tests malformed and out of range numbers.
///
/// Expected: Invalid with the matching reason
#[tokio::test]
async fn rejects_malformed_and_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let team = factory::create_team(&test.db).await?;
    let service = PlayerService::new(&test.db);

    for raw in ["", "abc", "7.5", "<33>"] {
        assert_eq!(
            service.check_jersey_number(raw, team.id, None).await?,
            JerseyNumberCheck::Invalid(InvalidJerseyNumber::NotAnInteger)
        );
    }
    for raw in ["0", "100", "-5", "4294967296"] {
        assert_eq!(
            service.check_jersey_number(raw, team.id, None).await?,
            JerseyNumberCheck::Invalid(InvalidJerseyNumber::OutOfRange)
        );
    }

    Ok(())
}

/// Tests the collision rule for new and edited players.
///
/// Verifies a held number is taken for a new player and for a teammate,
/// but valid for the player who holds it.
///
/// Expected: Taken(33) for new/teammate, Valid(33) for the holder
#[tokio::test]
async fn excludes_holder_by_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let (team, players) =
        factory::create_team_with_numbers(&test.db, "predators", &[33, 91]).await?;
    let service = PlayerService::new(&test.db);

    assert_eq!(
        service.check_jersey_number("33", team.id, None).await?,
        JerseyNumberCheck::Taken(33)
    );
    assert_eq!(
        service
            .check_jersey_number("33", team.id, Some(players[1].id))
            .await?,
        JerseyNumberCheck::Taken(33)
    );
    assert_eq!(
        service
            .check_jersey_number(" 33 ", team.id, Some(players[0].id))
            .await?,
        JerseyNumberCheck::Valid(33)
    );

    Ok(())
}
