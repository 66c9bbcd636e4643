//! Team data repository, including employee and user membership.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::team::{Team, TeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one team; used per item by batch team creation.
    pub async fn create(&self, params: TeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Team::from_entity))
    }

    pub async fn rename(&self, id: i32, params: TeamParams) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);

        let entity = active.update(self.db).await?;
        Ok(Some(Team::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn get_employee_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::EmployeeTeam::find()
            .filter(entity::employee_team::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.employee_id).collect())
    }

    pub async fn get_user_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::UserTeam::find()
            .filter(entity::user_team::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Teams the given user belongs to.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Team>, DbErr> {
        let team_ids: Vec<i32> = entity::prelude::UserTeam::find()
            .filter(entity::user_team::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.team_id)
            .collect();

        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn add_employee(&self, team_id: i32, employee_id: i32) -> Result<(), DbErr> {
        entity::employee_team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            employee_id: ActiveValue::Set(employee_id),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn remove_employee(&self, team_id: i32, employee_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EmployeeTeam::delete_many()
            .filter(entity::employee_team::Column::TeamId.eq(team_id))
            .filter(entity::employee_team::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn add_user(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::user_team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn remove_user(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserTeam::delete_many()
            .filter(entity::user_team::Column::TeamId.eq(team_id))
            .filter(entity::user_team::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
