//! Query string parameters shared by several endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    /// Zero-based page number.
    #[serde(default)]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Required inclusive date range.
#[derive(Debug, Deserialize)]
pub struct RangeParam {
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

/// Optional filters for the order list.
#[derive(Debug, Deserialize)]
pub struct OrderListParam {
    pub start: Option<NaiveDate>,
    pub finish: Option<NaiveDate>,
    pub user_id: Option<i32>,
}

/// Date range plus the checked state to list.
#[derive(Debug, Deserialize)]
pub struct CheckedParam {
    pub start: NaiveDate,
    pub finish: NaiveDate,
    #[serde(default = "default_check")]
    pub check: bool,
}

fn default_check() -> bool {
    true
}
