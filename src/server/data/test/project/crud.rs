use super::*;

/// Tests the create, update and delete lifecycle of a project.
///
/// Expected: values persisted; delete reports existence
#[tokio::test]
async fn creates_updates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(ProjectParams {
            name: "Retail".to_string(),
            vid_doc: "invoice".to_string(),
        })
        .await?;
    assert_eq!(project.vid_doc, "invoice");

    let updated = repo
        .update(
            project.id,
            ProjectParams {
                name: "Retail".to_string(),
                vid_doc: "return".to_string(),
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.vid_doc, "return");

    assert_eq!(repo.get_all().await?.len(), 1);
    assert!(repo.delete(project.id).await?);
    assert!(repo.find_by_id(project.id).await?.is_none());
    assert!(!repo.delete(project.id).await?);

    Ok(())
}
