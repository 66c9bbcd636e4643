//! Batch outcome domain model.
//!
//! A `BulkOutcome` is what the bulk coordinator produces for one request: every submitted
//! item ends up either in `added` (as the stored record) or in `failed` (paired with its
//! failure), never both and never neither.

use axum::http::StatusCode;

use crate::model::bulk::{BulkFailureDto, BulkFailureKindDto, BulkResponseDto, BulkStatusDto};

/// Why a batch item was not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkFailureKind {
    /// Unique constraint violation.
    Conflict,
    /// The record the item refers to does not exist.
    NotFound,
    /// Any other storage error, including a panicking worker.
    Persistence,
    /// The batch deadline elapsed before the item was confirmed.
    Timeout,
}

impl BulkFailureKind {
    pub fn into_dto(self) -> BulkFailureKindDto {
        match self {
            Self::Conflict => BulkFailureKindDto::Conflict,
            Self::NotFound => BulkFailureKindDto::NotFound,
            Self::Persistence => BulkFailureKindDto::Persistence,
            Self::Timeout => BulkFailureKindDto::Timeout,
        }
    }
}

/// A submitted item paired with the reason it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFailure<T> {
    pub item: T,
    pub kind: BulkFailureKind,
    pub message: String,
}

/// Overall classification of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkStatus {
    /// Every item was stored. Also the status of an empty batch.
    AllSucceeded,
    /// At least one item stored and at least one failed.
    Partial,
    /// No item stored out of a non-empty batch.
    AllFailed,
    /// The deadline elapsed with at least one item unconfirmed.
    TimedOut,
}

impl BulkStatus {
    /// Maps the classification onto the HTTP status of the batch response.
    ///
    /// # Arguments
    /// - `on_success` - Status for a fully successful batch, `201 Created` for creation
    ///   endpoints and `200 OK` for assignment endpoints
    pub fn status_code(self, on_success: StatusCode) -> StatusCode {
        match self {
            Self::AllSucceeded => on_success,
            Self::Partial => StatusCode::MULTI_STATUS,
            Self::AllFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TimedOut => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn into_dto(self) -> BulkStatusDto {
        match self {
            Self::AllSucceeded => BulkStatusDto::AllSucceeded,
            Self::Partial => BulkStatusDto::Partial,
            Self::AllFailed => BulkStatusDto::AllFailed,
            Self::TimedOut => BulkStatusDto::TimedOut,
        }
    }
}

/// Aggregate result of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome<T, O> {
    pub added: Vec<O>,
    pub failed: Vec<BulkFailure<T>>,
}

impl<T, O> Default for BulkOutcome<T, O> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T, O> BulkOutcome<T, O> {
    /// Number of items accounted for, successes plus failures.
    pub fn len(&self) -> usize {
        self.added.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any item failed because the deadline elapsed.
    pub fn timed_out(&self) -> bool {
        self.failed
            .iter()
            .any(|failure| failure.kind == BulkFailureKind::Timeout)
    }

    pub fn status(&self) -> BulkStatus {
        if self.timed_out() {
            BulkStatus::TimedOut
        } else if self.failed.is_empty() {
            BulkStatus::AllSucceeded
        } else if self.added.is_empty() {
            BulkStatus::AllFailed
        } else {
            BulkStatus::Partial
        }
    }

    /// Converts the outcome into the response DTO.
    ///
    /// # Arguments
    /// - `added` - Conversion from a stored record to its DTO
    /// - `item` - Conversion from a submitted item back to its request DTO
    pub fn into_dto<A, F>(
        self,
        added: impl Fn(O) -> A,
        item: impl Fn(T) -> F,
    ) -> BulkResponseDto<A, F> {
        let status = self.status().into_dto();

        BulkResponseDto {
            status,
            added: self.added.into_iter().map(added).collect(),
            errors: self
                .failed
                .into_iter()
                .map(|failure| BulkFailureDto {
                    item: item(failure.item),
                    kind: failure.kind.into_dto(),
                    error: failure.message,
                })
                .collect(),
        }
    }
}
