//! Order service for business logic.
//!
//! Three batch operations run through the bulk coordinator: importing orders (with the
//! configured deadline), assigning collectors and checking orders. Each has its own
//! storage collaborator wrapping a single repository write.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{order::OrderRepository, project::ProjectRepository},
    error::AppError,
    model::{
        bulk::BulkOutcome,
        order::{
            AssignCollectorParams, CheckOrderParams, CreateOrderParams, DateRange, Order,
            OrderFilter,
        },
    },
    service::bulk::{BulkSettings, BulkStore},
};

/// Inserts one imported order per call.
#[derive(Clone)]
pub struct OrderStore {
    db: DatabaseConnection,
}

impl BulkStore<CreateOrderParams> for OrderStore {
    type Output = Order;

    async fn create(&self, item: CreateOrderParams) -> Result<Order, DbErr> {
        OrderRepository::new(&self.db).create(item).await
    }
}

/// Applies one collector assignment per call.
#[derive(Clone)]
pub struct CollectorStore {
    db: DatabaseConnection,
}

impl BulkStore<AssignCollectorParams> for CollectorStore {
    type Output = Order;

    async fn create(&self, item: AssignCollectorParams) -> Result<Order, DbErr> {
        OrderRepository::new(&self.db).assign_collector(item).await
    }
}

/// Applies one check result per call.
#[derive(Clone)]
pub struct CheckStore {
    db: DatabaseConnection,
}

impl BulkStore<CheckOrderParams> for CheckStore {
    type Output = Order;

    async fn create(&self, item: CheckOrderParams) -> Result<Order, DbErr> {
        OrderRepository::new(&self.db).set_check(item).await
    }
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports a batch of orders under the configured deadline.
    ///
    /// Items still running when `settings.order_timeout` elapses are cancelled and
    /// reported as timeouts. A duplicate `order_uid` is a conflict for that item only.
    ///
    /// # Returns
    /// - `Ok(BulkOutcome)` - One outcome per item
    /// - `Err(AppError::BadRequest)` - Batch too large or an `order_uid` not positive
    pub async fn create_bulk(
        &self,
        settings: &BulkSettings,
        items: Vec<CreateOrderParams>,
    ) -> Result<BulkOutcome<CreateOrderParams, Order>, AppError> {
        settings.validate_batch(&items, CreateOrderParams::validate)?;

        let store = OrderStore {
            db: self.db.clone(),
        };

        Ok(settings
            .coordinator()
            .with_deadline(settings.order_timeout)
            .submit(&store, items)
            .await)
    }

    /// Assigns collectors and keepers to a batch of orders.
    ///
    /// An unknown `order_uid` or a missing employee/user fails only that item.
    pub async fn assign_collectors(
        &self,
        settings: &BulkSettings,
        items: Vec<AssignCollectorParams>,
    ) -> Result<BulkOutcome<AssignCollectorParams, Order>, AppError> {
        settings.validate_batch(&items, AssignCollectorParams::validate)?;

        let store = CollectorStore {
            db: self.db.clone(),
        };

        Ok(settings.coordinator().submit(&store, items).await)
    }

    /// Records check results for a batch of orders.
    pub async fn check(
        &self,
        settings: &BulkSettings,
        items: Vec<CheckOrderParams>,
    ) -> Result<BulkOutcome<CheckOrderParams, Order>, AppError> {
        settings.validate_batch(&items, CheckOrderParams::validate)?;

        let store = CheckStore {
            db: self.db.clone(),
        };

        Ok(settings.coordinator().submit(&store, items).await)
    }

    pub async fn get_filtered(&self, filter: OrderFilter) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_filtered(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn get_by_uid(&self, order_uid: i64) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_uid(order_uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order with uid {} not found", order_uid)))
    }

    pub async fn get_assembly(&self, range: DateRange) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_assembly(range).await?)
    }

    pub async fn get_checked(&self, range: DateRange, check: bool) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db)
            .get_checked(range, check)
            .await?)
    }

    /// Orders in range that the user may see through the document kinds of their projects.
    pub async fn get_for_user(&self, user_id: i32, range: DateRange) -> Result<Vec<Order>, AppError> {
        let vid_docs: Vec<String> = ProjectRepository::new(self.db)
            .get_for_user(user_id)
            .await?
            .into_iter()
            .map(|project| project.vid_doc)
            .collect();

        Ok(OrderRepository::new(self.db)
            .get_by_vid_docs(range, vid_docs)
            .await?)
    }
}
