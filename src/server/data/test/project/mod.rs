use crate::server::{data::project::ProjectRepository, model::project::ProjectParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod membership;
