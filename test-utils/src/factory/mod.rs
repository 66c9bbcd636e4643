//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert the entity into the database and return
//! the stored model with its generated identity.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let employee = factory::employee::create_employee(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let order = factory::order::OrderFactory::new(&db)
//!     .order_uid(1001)
//!     .vid_doc("invoice")
//!     .build()
//!     .await?;
//! ```

pub mod employee;
pub mod helpers;
pub mod membership;
pub mod order;
pub mod user;

pub use employee::create_employee;
pub use membership::{create_project, create_role, create_team};
pub use order::create_order;
pub use user::create_user;
