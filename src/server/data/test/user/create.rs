use super::*;

/// Tests registering a user and reading back their credentials.
///
/// Expected: Ok with the stored hash returned only through credentials lookup
#[tokio::test]
async fn creates_user_with_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("keeper@example.com")).await?;

    assert_eq!(user.email, "keeper@example.com");
    assert!(!user.admin);
    assert!(!user.blocked);
    assert!(!user.logged_in);

    let credentials = repo
        .find_credentials_by_email("keeper@example.com")
        .await?
        .unwrap();
    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$placeholder");

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests that an email can only be registered once.
///
/// Expected: Err on second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("twice@example.com")).await?;

    let result = repo.create(params("twice@example.com")).await;
    assert!(result.is_err());

    Ok(())
}
