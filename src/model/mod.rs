//! Request and response shapes shared by the HTTP API.
//!
//! Every type here is serialized with serde and documented through utoipa so that it
//! shows up in the generated OpenAPI document.

pub mod api;
pub mod bulk;
pub mod employee;
pub mod order;
pub mod project;
pub mod role;
pub mod team;
pub mod user;
