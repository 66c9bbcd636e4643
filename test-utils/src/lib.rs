//! Eastwh Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! warehouse backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, plus factories for
//! inserting entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory / fixture**: Entity creation with and without database insertion
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Employee;
//!
//! #[tokio::test]
//! async fn test_employee_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Employee)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
