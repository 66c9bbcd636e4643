use crate::server::{data::employee::EmployeeRepository, model::employee::EmployeeParams};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_code;
mod update;

fn params(code: &str) -> EmployeeParams {
    EmployeeParams {
        code: code.to_string(),
        first_name: "Ivan".to_string(),
        name: "Petrov".to_string(),
        last_name: String::new(),
        inn: String::new(),
        phone: String::new(),
    }
}
