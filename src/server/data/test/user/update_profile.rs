use super::*;

/// Tests replacing name and contact fields.
///
/// Expected: fields replaced, email and flags untouched
#[tokio::test]
async fn updates_name_and_contacts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let stored = repo.create(params("olga@example.com")).await?;

    let updated = repo
        .update_profile(
            stored.id,
            UpdateUserParams {
                first_name: "Olga".to_string(),
                name: "Checker".to_string(),
                last_name: "Petrovna".to_string(),
                phone: "+7 900 000 00 00".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Checker");
    assert_eq!(updated.last_name, "Petrovna");
    assert_eq!(updated.phone, "+7 900 000 00 00");
    assert_eq!(updated.email, "olga@example.com");
    assert_eq!(updated.admin, stored.admin);
    assert_eq!(repo.find_by_id(stored.id).await?, Some(updated));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;

    let result = UserRepository::new(db)
        .update_profile(
            stored.id + 100,
            UpdateUserParams {
                first_name: String::new(),
                name: "Nobody".to_string(),
                last_name: String::new(),
                phone: String::new(),
            },
        )
        .await?;
    assert!(result.is_none());

    Ok(())
}
