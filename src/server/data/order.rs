//! Order data repository for database operations.
//!
//! Besides plain lookups this repository implements the per-item writes used by the
//! order batch endpoints: import, collector assignment and check.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::order::{
    AssignCollectorParams, CheckOrderParams, CreateOrderParams, DateRange, Order, OrderFilter,
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one imported order.
    ///
    /// New orders start unchecked, without collector or keeper.
    ///
    /// # Returns
    /// - `Ok(Order)` - Stored order
    /// - `Err(DbErr)` - Insert failed; a duplicate `order_uid` is a unique constraint violation
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let now = Utc::now();
        let entity = entity::order::ActiveModel {
            order_uid: ActiveValue::Set(params.order_uid),
            unicum_num: ActiveValue::Set(params.unicum_num),
            order_date: ActiveValue::Set(params.order_date),
            order_sum: ActiveValue::Set(params.order_sum),
            driver: ActiveValue::Set(params.driver),
            agent: ActiveValue::Set(params.agent),
            brieforg: ActiveValue::Set(params.brieforg),
            client_id: ActiveValue::Set(params.client_id),
            client_name: ActiveValue::Set(params.client_name),
            client_address: ActiveValue::Set(params.client_address),
            vid_doc: ActiveValue::Set(params.vid_doc),
            start_at: ActiveValue::Set(None),
            finish_at: ActiveValue::Set(None),
            done: ActiveValue::Set(false),
            status: ActiveValue::Set(params.status),
            user_id: ActiveValue::Set(None),
            collector_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Order::from_entity))
    }

    pub async fn find_by_uid(&self, order_uid: i64) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderUid.eq(order_uid))
            .one(self.db)
            .await?;
        Ok(entity.map(Order::from_entity))
    }

    /// Lists orders matching the optional date range and keeper filters.
    pub async fn get_filtered(&self, filter: OrderFilter) -> Result<Vec<Order>, DbErr> {
        let mut condition = Condition::all();
        if let Some(range) = filter.range {
            condition = condition.add(in_range(range));
        }
        if let Some(user_id) = filter.user_id {
            condition = condition.add(entity::order::Column::UserId.eq(user_id));
        }

        self.find_where(condition).await
    }

    /// Orders in range that have a collector assigned.
    pub async fn get_assembly(&self, range: DateRange) -> Result<Vec<Order>, DbErr> {
        self.find_where(
            Condition::all()
                .add(in_range(range))
                .add(entity::order::Column::CollectorId.is_not_null()),
        )
        .await
    }

    /// Orders in range with the given checked state.
    pub async fn get_checked(&self, range: DateRange, check: bool) -> Result<Vec<Order>, DbErr> {
        self.find_where(
            Condition::all()
                .add(in_range(range))
                .add(entity::order::Column::Done.eq(check)),
        )
        .await
    }

    /// Orders in range whose document kind is one of `vid_docs`.
    pub async fn get_by_vid_docs(
        &self,
        range: DateRange,
        vid_docs: Vec<String>,
    ) -> Result<Vec<Order>, DbErr> {
        if vid_docs.is_empty() {
            return Ok(Vec::new());
        }

        self.find_where(
            Condition::all()
                .add(in_range(range))
                .add(entity::order::Column::VidDoc.is_in(vid_docs)),
        )
        .await
    }

    /// Assigns the collector and the keeper of an order. Leaves `done` untouched.
    ///
    /// # Returns
    /// - `Ok(Order)` - Updated order
    /// - `Err(DbErr::RecordNotFound)` - No order with that `order_uid`
    /// - `Err(DbErr)` - Update failed, e.g. the employee or user does not exist
    pub async fn assign_collector(&self, params: AssignCollectorParams) -> Result<Order, DbErr> {
        let existing = self.find_entity_by_uid(params.order_uid).await?;

        let mut active: entity::order::ActiveModel = existing.into();
        active.collector_id = ActiveValue::Set(Some(params.employee_id));
        active.user_id = ActiveValue::Set(Some(params.user_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Order::from_entity(entity))
    }

    /// Sets the checked flag of an order and records the checking user.
    pub async fn set_check(&self, params: CheckOrderParams) -> Result<Order, DbErr> {
        let existing = self.find_entity_by_uid(params.order_uid).await?;

        let mut active: entity::order::ActiveModel = existing.into();
        active.done = ActiveValue::Set(params.check);
        active.user_id = ActiveValue::Set(Some(params.user_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Order::from_entity(entity))
    }

    async fn find_entity_by_uid(&self, order_uid: i64) -> Result<entity::order::Model, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderUid.eq(order_uid))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order with uid {} not found",
                order_uid
            )))
    }

    async fn find_where(&self, condition: Condition) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(condition)
            .order_by_asc(entity::order::Column::OrderDate)
            .order_by_asc(entity::order::Column::OrderUid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }
}

fn in_range(range: DateRange) -> Condition {
    Condition::all().add(
        entity::order::Column::OrderDate.between(range.start, range.finish),
    )
}
