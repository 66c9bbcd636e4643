//! Response body of every batch endpoint.
//!
//! A batch response always enumerates both sides: the records that were stored and the
//! submitted items that were not, each paired with why.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall classification of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkStatusDto {
    AllSucceeded,
    Partial,
    AllFailed,
    TimedOut,
}

/// Reason category for a failed batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkFailureKindDto {
    /// The item collides with an existing record (unique constraint).
    Conflict,
    /// The item refers to a record that does not exist, such as an unknown order uid.
    NotFound,
    /// Any other storage failure.
    Persistence,
    /// The item was not confirmed before the batch deadline.
    Timeout,
}

/// A submitted item that could not be stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkFailureDto<F> {
    /// The item exactly as it was submitted.
    pub item: F,
    pub kind: BulkFailureKindDto,
    pub error: String,
}

/// Aggregate result of a batch.
///
/// `added` and `errors` together account for every submitted item exactly once. Neither
/// list preserves submission order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkResponseDto<A, F> {
    pub status: BulkStatusDto,
    pub added: Vec<A>,
    pub errors: Vec<BulkFailureDto<F>>,
}
