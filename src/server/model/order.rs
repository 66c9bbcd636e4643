//! Order domain models and parameters.
//!
//! Orders are imported in batches from the upstream accounting system, identified by
//! `order_uid`. After import a keeper assigns a collector (an employee) who assembles
//! the order, and the order is later checked.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::order::{AssignCollectorDto, CheckOrderDto, CreateOrderDto, OrderDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_uid: i64,
    pub unicum_num: i64,
    pub order_date: NaiveDate,
    pub order_sum: f64,
    pub driver: String,
    pub agent: String,
    pub brieforg: String,
    pub client_id: i64,
    pub client_name: String,
    pub client_address: String,
    pub vid_doc: String,
    pub start_at: Option<DateTime<Utc>>,
    pub finish_at: Option<DateTime<Utc>>,
    pub done: bool,
    pub status: i32,
    pub user_id: Option<i32>,
    pub collector_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            order_uid: entity.order_uid,
            unicum_num: entity.unicum_num,
            order_date: entity.order_date,
            order_sum: entity.order_sum,
            driver: entity.driver,
            agent: entity.agent,
            brieforg: entity.brieforg,
            client_id: entity.client_id,
            client_name: entity.client_name,
            client_address: entity.client_address,
            vid_doc: entity.vid_doc,
            start_at: entity.start_at,
            finish_at: entity.finish_at,
            done: entity.done,
            status: entity.status,
            user_id: entity.user_id,
            collector_id: entity.collector_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_uid: self.order_uid,
            unicum_num: self.unicum_num,
            order_date: self.order_date,
            order_sum: self.order_sum,
            driver: self.driver,
            agent: self.agent,
            brieforg: self.brieforg,
            client_id: self.client_id,
            client_name: self.client_name,
            client_address: self.client_address,
            vid_doc: self.vid_doc,
            start_at: self.start_at,
            finish_at: self.finish_at,
            done: self.done,
            status: self.status,
            user_id: self.user_id,
            collector_id: self.collector_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Inclusive range of order dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

impl DateRange {
    /// # Returns
    /// - `Ok(DateRange)` - `start <= finish`
    /// - `Err(AppError::BadRequest)` - Range is inverted
    pub fn new(start: NaiveDate, finish: NaiveDate) -> Result<Self, AppError> {
        if start > finish {
            return Err(AppError::BadRequest(format!(
                "Range start {} is after finish {}",
                start, finish
            )));
        }
        Ok(Self { start, finish })
    }

    /// Builds a range from optional query bounds; both or neither must be given.
    pub fn from_optional(
        start: Option<NaiveDate>,
        finish: Option<NaiveDate>,
    ) -> Result<Option<Self>, AppError> {
        match (start, finish) {
            (Some(start), Some(finish)) => Self::new(start, finish).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::BadRequest(
                "Both start and finish must be provided".to_string(),
            )),
        }
    }
}

/// Filters for listing orders.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub range: Option<DateRange>,
    pub user_id: Option<i32>,
}

/// One order of an import batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub order_uid: i64,
    pub unicum_num: i64,
    pub order_date: NaiveDate,
    pub order_sum: f64,
    pub driver: String,
    pub agent: String,
    pub brieforg: String,
    pub client_id: i64,
    pub client_name: String,
    pub client_address: String,
    pub vid_doc: String,
    pub status: i32,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            order_uid: dto.order_uid,
            unicum_num: dto.unicum_num,
            order_date: dto.order_date,
            order_sum: dto.order_sum,
            driver: dto.driver,
            agent: dto.agent,
            brieforg: dto.brieforg,
            client_id: dto.client_id,
            client_name: dto.client_name,
            client_address: dto.client_address,
            vid_doc: dto.vid_doc,
            status: dto.status,
        }
    }

    pub fn into_dto(self) -> CreateOrderDto {
        CreateOrderDto {
            order_uid: self.order_uid,
            unicum_num: self.unicum_num,
            order_date: self.order_date,
            order_sum: self.order_sum,
            driver: self.driver,
            agent: self.agent,
            brieforg: self.brieforg,
            client_id: self.client_id,
            client_name: self.client_name,
            client_address: self.client_address,
            vid_doc: self.vid_doc,
            status: self.status,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_order_uid(self.order_uid)
    }
}

/// Assigns a collector and the responsible keeper to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignCollectorParams {
    pub order_uid: i64,
    pub user_id: i32,
    pub employee_id: i32,
}

impl AssignCollectorParams {
    pub fn from_dto(dto: AssignCollectorDto) -> Self {
        Self {
            order_uid: dto.order_uid,
            user_id: dto.user_id,
            employee_id: dto.employee_id,
        }
    }

    pub fn into_dto(self) -> AssignCollectorDto {
        AssignCollectorDto {
            order_uid: self.order_uid,
            user_id: self.user_id,
            employee_id: self.employee_id,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_order_uid(self.order_uid)
    }
}

/// Sets the checked flag of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOrderParams {
    pub order_uid: i64,
    pub user_id: i32,
    pub check: bool,
}

impl CheckOrderParams {
    pub fn from_dto(dto: CheckOrderDto) -> Self {
        Self {
            order_uid: dto.order_uid,
            user_id: dto.user_id,
            check: dto.check,
        }
    }

    pub fn into_dto(self) -> CheckOrderDto {
        CheckOrderDto {
            order_uid: self.order_uid,
            user_id: self.user_id,
            check: self.check,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_order_uid(self.order_uid)
    }
}

fn validate_order_uid(order_uid: i64) -> Result<(), AppError> {
    if order_uid <= 0 {
        return Err(AppError::BadRequest(format!(
            "order_uid must be positive, got {}",
            order_uid
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn accepts_single_day_range() {
        let range = DateRange::new(date(1), date(1)).unwrap();
        assert_eq!(range.start, range.finish);
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            DateRange::new(date(5), date(1)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn requires_both_bounds() {
        assert!(DateRange::from_optional(None, None).unwrap().is_none());
        assert!(DateRange::from_optional(Some(date(1)), None).is_err());
    }

    #[test]
    fn rejects_non_positive_order_uid() {
        let params = CheckOrderParams {
            order_uid: 0,
            user_id: 1,
            check: true,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn converts_entity_fixture() {
        let order = Order::from_entity(test_utils::fixture::order::entity());

        assert_eq!(order.order_uid, 5001);
        assert_eq!(order.collector_id, Some(3));
        assert!(!order.into_dto().done);
    }
}
