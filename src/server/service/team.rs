//! Team service for business logic.
//!
//! Teams group collectors (employees) and warehouse users. Teams are created in batches
//! through the bulk coordinator; membership changes check that both sides exist so the
//! caller gets a 404 rather than a foreign key error.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{employee::EmployeeRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{
        bulk::BulkOutcome,
        team::{Team, TeamParams, TeamWithMembers},
    },
    service::bulk::{BulkSettings, BulkStore},
};

/// Inserts one team per call.
#[derive(Clone)]
pub struct TeamStore {
    db: DatabaseConnection,
}

impl BulkStore<TeamParams> for TeamStore {
    type Output = Team;

    async fn create(&self, item: TeamParams) -> Result<Team, DbErr> {
        TeamRepository::new(&self.db).create(item).await
    }
}

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a batch of teams; a name already taken is a conflict for that item.
    pub async fn create_bulk(
        &self,
        settings: &BulkSettings,
        items: Vec<TeamParams>,
    ) -> Result<BulkOutcome<TeamParams, Team>, AppError> {
        settings.validate_batch(&items, TeamParams::validate)?;

        let store = TeamStore {
            db: self.db.clone(),
        };

        Ok(settings.coordinator().submit(&store, items).await)
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Loads a team with its employees and users.
    ///
    /// # Returns
    /// - `Ok(TeamWithMembers)` - Team and members
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get(&self, id: i32) -> Result<TeamWithMembers, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let team = team_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))?;

        let employee_ids = team_repo.get_employee_ids(id).await?;
        let user_ids = team_repo.get_user_ids(id).await?;

        let employees = EmployeeRepository::new(self.db)
            .get_by_ids(employee_ids)
            .await?;
        let users = UserRepository::new(self.db).get_by_ids(user_ids).await?;

        Ok(TeamWithMembers {
            team,
            employees,
            users,
        })
    }

    pub async fn rename(&self, id: i32, params: TeamParams) -> Result<Team, AppError> {
        params.validate()?;

        TeamRepository::new(self.db)
            .rename(id, params)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).delete(id).await? {
            return Err(team_not_found(id));
        }
        Ok(())
    }

    pub async fn add_employee(&self, team_id: i32, employee_id: i32) -> Result<(), AppError> {
        self.ensure_team(team_id).await?;
        if EmployeeRepository::new(self.db)
            .find_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                employee_id
            )));
        }

        TeamRepository::new(self.db)
            .add_employee(team_id, employee_id)
            .await?;
        Ok(())
    }

    pub async fn remove_employee(&self, team_id: i32, employee_id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db)
            .remove_employee(team_id, employee_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Employee {} is not a member of team {}",
                employee_id, team_id
            )));
        }
        Ok(())
    }

    pub async fn add_user(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        self.ensure_team(team_id).await?;
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        TeamRepository::new(self.db).add_user(team_id, user_id).await?;
        Ok(())
    }

    pub async fn remove_user(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db)
            .remove_user(team_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of team {}",
                user_id, team_id
            )));
        }
        Ok(())
    }

    async fn ensure_team(&self, team_id: i32) -> Result<(), AppError> {
        if TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(team_not_found(team_id));
        }
        Ok(())
    }
}

fn team_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Team {} not found", id))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::server::model::bulk::{BulkFailureKind, BulkStatus};
    use test_utils::{builder::TestBuilder, factory};

    fn settings() -> BulkSettings {
        BulkSettings {
            max_in_flight: 2,
            max_items: 10,
            order_timeout: Duration::from_secs(30),
        }
    }

    fn team(name: &str) -> TeamParams {
        TeamParams {
            name: name.to_string(),
        }
    }

    /// Tests batch team creation with a repeated name inside the batch.
    ///
    /// Expected: one of the two identical items conflicts
    #[tokio::test]
    async fn duplicate_names_in_batch_conflict() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Team)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let outcome = TeamService::new(db)
            .create_bulk(&settings(), vec![team("North"), team("South"), team("North")])
            .await?;

        assert_eq!(outcome.status(), BulkStatus::Partial);
        assert_eq!(outcome.added.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].item, team("North"));
        assert_eq!(outcome.failed[0].kind, BulkFailureKind::Conflict);

        Ok(())
    }

    /// Tests loading a team with members.
    ///
    /// Expected: employees and users resolved to full records
    #[tokio::test]
    async fn get_resolves_members() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let stored = factory::membership::create_team(db).await?;
        let employee = factory::employee::create_employee(db).await?;
        let user = factory::user::create_user(db).await?;

        let service = TeamService::new(db);
        service.add_employee(stored.id, employee.id).await?;
        service.add_user(stored.id, user.id).await?;

        let team = service.get(stored.id).await?;
        assert_eq!(team.employees[0].code, employee.code);
        assert_eq!(team.users[0].email, user.email);

        assert!(matches!(
            service.add_employee(stored.id, employee.id + 100).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.add_user(stored.id + 100, user.id).await,
            Err(AppError::NotFound(_))
        ));

        service.remove_user(stored.id, user.id).await?;
        assert!(matches!(
            service.remove_user(stored.id, user.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
