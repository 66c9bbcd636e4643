//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into domain
//! parameters, call the matching service and convert the result back into a DTO. Batch
//! endpoints derive their status code from the batch outcome.

pub mod auth;
pub mod employee;
pub mod order;
pub mod param;
pub mod ping;
pub mod project;
pub mod role;
pub mod team;
pub mod user;
