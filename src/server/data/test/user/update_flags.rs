use super::*;

/// Tests blocking and logged-in flags.
///
/// Expected: flags persisted, missing users reported with false
#[tokio::test]
async fn updates_blocked_and_logged_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.set_blocked(stored.id, true).await?);
    assert!(repo.set_logged_in(stored.id, true).await?);

    let user = repo.find_by_id(stored.id).await?.unwrap();
    assert!(user.blocked);
    assert!(user.logged_in);

    assert!(!repo.set_blocked(stored.id + 100, true).await?);

    Ok(())
}

/// Tests replacing the password hash and the restore flag.
///
/// Expected: new hash stored, restore follows the argument
#[tokio::test]
async fn updates_password_and_restore() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo
        .update_password(stored.id, "temporary-hash".to_string(), true)
        .await?);
    assert_eq!(
        repo.get_password_hash(stored.id).await?,
        Some("temporary-hash".to_string())
    );
    assert!(repo.find_by_id(stored.id).await?.unwrap().restore);

    repo.update_password(stored.id, "own-hash".to_string(), false)
        .await?;
    assert!(!repo.find_by_id(stored.id).await?.unwrap().restore);

    Ok(())
}
