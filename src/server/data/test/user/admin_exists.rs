use super::*;

/// Tests admin detection.
///
/// Expected: false with only regular users, true once an admin exists
#[tokio::test]
async fn detects_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::UserFactory::new(db).admin(true).build().await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
