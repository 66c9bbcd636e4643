use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_all_paginated;
mod roles;
mod update_flags;
mod update_profile;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        first_name: "Olga".to_string(),
        name: "Keeper".to_string(),
        last_name: String::new(),
        phone: String::new(),
        admin: false,
    }
}
