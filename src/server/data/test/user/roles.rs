use super::*;

/// Tests assigning and removing roles.
///
/// Expected: roles listed by name; removal reports whether a row was deleted
#[tokio::test]
async fn assigns_and_removes_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let roles = RoleRepository::new(db);
    let checker = roles.create("checker".to_string()).await?;
    let keeper = roles.create("keeper".to_string()).await?;

    let repo = UserRepository::new(db);
    repo.add_role(user.id, keeper.id).await?;
    repo.add_role(user.id, checker.id).await?;

    let assigned = repo.get_roles(user.id).await?;
    assert_eq!(
        assigned.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["checker", "keeper"]
    );

    assert!(repo.add_role(user.id, keeper.id).await.is_err());

    assert!(repo.remove_role(user.id, keeper.id).await?);
    assert!(!repo.remove_role(user.id, keeper.id).await?);
    assert_eq!(repo.get_roles(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that deleting a role removes its assignments.
///
/// Expected: user has no roles after the role is deleted
#[tokio::test]
async fn deleting_role_cascades_to_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let role = factory::membership::create_role(db).await?;

    let repo = UserRepository::new(db);
    repo.add_role(user.id, role.id).await?;

    assert!(RoleRepository::new(db).delete(role.id).await?);
    assert!(repo.get_roles(user.id).await?.is_empty());

    Ok(())
}
