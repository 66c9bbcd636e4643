use super::*;

/// Tests project membership queries from both sides.
///
/// Expected: user listed in project and project listed for user until removal
#[tokio::test]
async fn manages_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::membership::create_project(db, "invoice").await?;
    let user = factory::user::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    repo.add_user(project.id, user.id).await?;

    assert_eq!(repo.get_user_ids(project.id).await?, vec![user.id]);
    let projects = repo.get_for_user(user.id).await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].vid_doc, "invoice");

    assert!(repo.add_user(project.id, user.id).await.is_err());

    assert!(repo.remove_user(project.id, user.id).await?);
    assert!(repo.get_for_user(user.id).await?.is_empty());

    Ok(())
}
