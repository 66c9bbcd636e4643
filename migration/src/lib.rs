pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_role_table;
mod m20250301_000003_create_team_table;
mod m20250301_000004_create_project_table;
mod m20250301_000005_create_employee_table;
mod m20250302_000006_create_order_table;
mod m20250302_000007_create_user_role_table;
mod m20250302_000008_create_user_team_table;
mod m20250302_000009_create_user_project_table;
mod m20250302_000010_create_employee_team_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_role_table::Migration),
            Box::new(m20250301_000003_create_team_table::Migration),
            Box::new(m20250301_000004_create_project_table::Migration),
            Box::new(m20250301_000005_create_employee_table::Migration),
            Box::new(m20250302_000006_create_order_table::Migration),
            Box::new(m20250302_000007_create_user_role_table::Migration),
            Box::new(m20250302_000008_create_user_team_table::Migration),
            Box::new(m20250302_000009_create_user_project_table::Migration),
            Box::new(m20250302_000010_create_employee_team_table::Migration),
        ]
    }
}
