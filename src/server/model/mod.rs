//! Domain models and operation parameters.
//!
//! Domain models are produced by repositories via `from_entity` and converted to API
//! DTOs with `into_dto`. Parameter types carry validated input from controllers down to
//! services and repositories.

pub mod bulk;
pub mod employee;
pub mod order;
pub mod project;
pub mod role;
pub mod team;
pub mod user;
