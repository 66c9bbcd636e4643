//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and rules that span more than one repository call
//! - **Orchestration**: Coordinating repositories and the bulk coordinator
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod bulk;
pub mod employee;
pub mod order;
pub mod password;
pub mod project;
pub mod role;
pub mod team;
pub mod user;
