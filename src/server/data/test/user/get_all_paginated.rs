use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested subset along with the total
/// number of users.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        factory::user::UserFactory::new(db)
            .name(format!("User{}", i))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);

    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(first.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(first[0].name, "User1");

    let (last, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].name, "User5");

    let (beyond, _) = repo.get_all_paginated(3, 2).await?;
    assert!(beyond.is_empty());

    Ok(())
}
