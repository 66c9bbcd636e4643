use crate::server::{
    data::order::OrderRepository,
    model::order::{
        AssignCollectorParams, CheckOrderParams, CreateOrderParams, DateRange, OrderFilter,
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

mod assign_collector;
mod create;
mod get_by_range;
mod set_check;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn march(start: u32, finish: u32) -> DateRange {
    DateRange::new(date(start), date(finish)).unwrap()
}
