use super::*;

/// Tests adding and removing employees and users.
///
/// Expected: member ids reflect every change
#[tokio::test]
async fn manages_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::membership::create_team(db).await?;
    let employee = factory::employee::create_employee(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    repo.add_employee(team.id, employee.id).await?;
    repo.add_user(team.id, user.id).await?;

    assert_eq!(repo.get_employee_ids(team.id).await?, vec![employee.id]);
    assert_eq!(repo.get_user_ids(team.id).await?, vec![user.id]);
    assert_eq!(
        repo.get_for_user(user.id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect::<Vec<_>>(),
        vec![team.id]
    );

    assert!(repo.remove_employee(team.id, employee.id).await?);
    assert!(repo.remove_user(team.id, user.id).await?);
    assert!(repo.get_employee_ids(team.id).await?.is_empty());
    assert!(repo.get_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that deleting a team removes its memberships.
///
/// Expected: employee no longer linked to any team
#[tokio::test]
async fn deleting_team_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::membership::create_team(db).await?;
    let employee = factory::employee::create_employee(db).await?;
    factory::membership::add_employee_to_team(db, team.id, employee.id).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.delete(team.id).await?);
    assert!(repo.get_employee_ids(team.id).await?.is_empty());

    Ok(())
}
