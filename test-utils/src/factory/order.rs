//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db)
///     .order_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .collector_id(Some(employee.id))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    order_uid: i64,
    order_date: NaiveDate,
    vid_doc: String,
    done: bool,
    user_id: Option<i32>,
    collector_id: Option<i32>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_uid: unique counter value
    /// - order_date: today (UTC)
    /// - vid_doc: `"invoice"`
    /// - done: `false`
    /// - user_id / collector_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            order_uid: next_id() as i64,
            order_date: Utc::now().date_naive(),
            vid_doc: "invoice".to_string(),
            done: false,
            user_id: None,
            collector_id: None,
        }
    }

    pub fn order_uid(mut self, order_uid: i64) -> Self {
        self.order_uid = order_uid;
        self
    }

    pub fn order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = order_date;
        self
    }

    pub fn vid_doc(mut self, vid_doc: impl Into<String>) -> Self {
        self.vid_doc = vid_doc.into();
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn collector_id(mut self, collector_id: Option<i32>) -> Self {
        self.collector_id = collector_id;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            order_uid: ActiveValue::Set(self.order_uid),
            unicum_num: ActiveValue::Set(0),
            order_date: ActiveValue::Set(self.order_date),
            order_sum: ActiveValue::Set(100.0),
            driver: ActiveValue::Set(String::new()),
            agent: ActiveValue::Set(String::new()),
            brieforg: ActiveValue::Set(String::new()),
            client_id: ActiveValue::Set(1),
            client_name: ActiveValue::Set("Test Client".to_string()),
            client_address: ActiveValue::Set(String::new()),
            vid_doc: ActiveValue::Set(self.vid_doc),
            start_at: ActiveValue::Set(None),
            finish_at: ActiveValue::Set(None),
            done: ActiveValue::Set(self.done),
            status: ActiveValue::Set(0),
            user_id: ActiveValue::Set(self.user_id),
            collector_id: ActiveValue::Set(self.collector_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}
