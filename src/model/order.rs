use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
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
    /// Warehouse keeper responsible for the order.
    pub user_id: Option<i32>,
    /// Employee assembling the order.
    pub collector_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A batch item for order creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    /// Upstream identifier of the order, must be positive and unique.
    pub order_uid: i64,
    #[serde(default)]
    pub unicum_num: i64,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub order_sum: f64,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub brieforg: String,
    #[serde(default)]
    pub client_id: i64,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub vid_doc: String,
    #[serde(default)]
    pub status: i32,
}

/// A batch item assigning a collector and keeper to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignCollectorDto {
    pub order_uid: i64,
    pub user_id: i32,
    pub employee_id: i32,
}

/// A batch item marking an order as checked (or not).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckOrderDto {
    pub order_uid: i64,
    pub user_id: i32,
    pub check: bool,
}
