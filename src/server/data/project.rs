//! Project data repository, including project membership.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::project::{Project, ProjectParams};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ProjectParams) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            vid_doc: ActiveValue::Set(params.vid_doc),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Project::from_entity))
    }

    /// Updates name and document kind.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(&self, id: i32, params: ProjectParams) -> Result<Option<Project>, DbErr> {
        let Some(existing) = entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::project::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.vid_doc = ActiveValue::Set(params.vid_doc);

        let entity = active.update(self.db).await?;
        Ok(Some(Project::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Ids of the users that belong to a project.
    pub async fn get_user_ids(&self, project_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::UserProject::find()
            .filter(entity::user_project::Column::ProjectId.eq(project_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Projects the given user belongs to.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Project>, DbErr> {
        let project_ids: Vec<i32> = entity::prelude::UserProject::find()
            .filter(entity::user_project::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.project_id)
            .collect();

        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Project::find()
            .filter(entity::project::Column::Id.is_in(project_ids))
            .order_by_asc(entity::project::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    /// Adds a user to a project. Adding an existing member is a unique violation.
    pub async fn add_user(&self, project_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::user_project::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            project_id: ActiveValue::Set(project_id),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn remove_user(&self, project_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserProject::delete_many()
            .filter(entity::user_project::Column::ProjectId.eq(project_id))
            .filter(entity::user_project::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
