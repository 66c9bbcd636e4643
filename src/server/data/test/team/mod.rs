use crate::server::{data::team::TeamRepository, model::team::TeamParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod membership;
