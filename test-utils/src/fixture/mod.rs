//! Test fixtures providing reusable entity models without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. Use them to test conversions
//! between entity, domain and DTO models.

pub mod employee;
pub mod order;
