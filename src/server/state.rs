//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle and the admin code service shares its slot through an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::{admin::AdminCodeService, bulk::BulkSettings};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Holds the one-time code that lets the first registered user become admin.
    pub admin_code_service: AdminCodeService,

    /// Limits applied to every bulk endpoint.
    pub bulk: BulkSettings,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        bulk: BulkSettings,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            bulk,
        }
    }
}
