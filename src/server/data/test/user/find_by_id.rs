use super::*;
use test_utils::factory;

#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let created = factory::create_user(&test.db).await?;

    let user = UserRepository::new(&test.db).find_by_id(created.id).await?;

    assert_eq!(user.map(|u| u.email), Some(created.email));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let user = UserRepository::new(&test.db).find_by_id(404).await?;

    assert!(user.is_none());

    Ok(())
}
