//! Bulk submission coordinator.
//!
//! Persists every item of a batch concurrently through a [`BulkStore`] and folds the
//! per-item results into a single [`BulkOutcome`]. One failing item never blocks or
//! aborts the others.
//!
//! # Concurrency
//!
//! Each item runs in its own task inside a `JoinSet`. A semaphore bounds how many tasks
//! talk to storage at once. The calling task is the only consumer of completions and
//! observes them in whatever order they finish.
//!
//! # Deadline
//!
//! With a deadline configured, items not confirmed when it elapses are aborted and
//! reported as [`BulkFailureKind::Timeout`]. Tasks that finished before the abort was
//! observed keep their real outcome. An aborted task may already have committed its
//! write, in which case the row exists although the item is reported as timed out.
//!
//! The clock starts when `submit` is called, before any permit is handed out. Time an
//! item spends queued behind the in-flight cap counts against the budget, so with a
//! small cap a queued item can time out without ever reaching storage.

use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use dioxus_logger::tracing;
use sea_orm::DbErr;
use tokio::{
    sync::Semaphore,
    task::{Id, JoinError, JoinSet},
    time::Instant,
};

use crate::server::{
    error::{is_unique_violation, AppError},
    model::bulk::{BulkFailure, BulkFailureKind, BulkOutcome},
};

/// Storage collaborator used by the coordinator.
///
/// Implementations are cloned into every worker, so they should be cheap handles such as
/// a pooled `DatabaseConnection`. `create` must be safe to call concurrently.
pub trait BulkStore<T>: Clone + Send + Sync + 'static {
    /// The stored record returned on success.
    type Output: Send + 'static;

    fn create(&self, item: T) -> impl Future<Output = Result<Self::Output, DbErr>> + Send;
}

/// Batch limits taken from configuration.
#[derive(Debug, Clone)]
pub struct BulkSettings {
    /// Maximum number of items persisted at the same time.
    pub max_in_flight: usize,
    /// Maximum number of items accepted in one request.
    pub max_items: usize,
    /// Deadline applied to order import batches.
    pub order_timeout: Duration,
}

impl BulkSettings {
    /// Coordinator without a deadline.
    pub fn coordinator(&self) -> BulkCoordinator {
        BulkCoordinator::new(self.max_in_flight)
    }

    /// Rejects a batch that is larger than allowed before any work is spawned.
    ///
    /// # Returns
    /// - `Ok(())` - Batch length within `max_items`
    /// - `Err(AppError::BadRequest)` - Batch too large
    pub fn ensure_batch_len(&self, len: usize) -> Result<(), AppError> {
        if len > self.max_items {
            return Err(AppError::BadRequest(format!(
                "Batch of {} items exceeds the limit of {}",
                len, self.max_items
            )));
        }
        Ok(())
    }

    /// Request-level checks run before any worker is spawned.
    ///
    /// # Returns
    /// - `Ok(())` - Batch length allowed and every item valid
    /// - `Err(AppError::BadRequest)` - Batch too large, or the first invalid item with
    ///   its position in the batch
    pub fn validate_batch<T>(
        &self,
        items: &[T],
        validate: impl Fn(&T) -> Result<(), AppError>,
    ) -> Result<(), AppError> {
        self.ensure_batch_len(items.len())?;

        for (index, item) in items.iter().enumerate() {
            validate(item).map_err(|err| match err {
                AppError::BadRequest(message) => {
                    AppError::BadRequest(format!("Item {}: {}", index, message))
                }
                other => other,
            })?;
        }

        Ok(())
    }
}

/// Fans a batch out to concurrent workers and gathers their outcomes.
#[derive(Debug, Clone)]
pub struct BulkCoordinator {
    max_in_flight: usize,
    deadline: Option<Duration>,
}

impl BulkCoordinator {
    /// Creates a coordinator without a deadline.
    ///
    /// A cap of zero is raised to one so the batch can always make progress.
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            max_in_flight: max_in_flight.max(1),
            deadline: None,
        }
    }

    /// Sets the time budget for the whole batch, measured from `submit`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Persists every item and returns the combined outcome.
    ///
    /// Every item yields exactly one entry: a stored record in `added` or the original
    /// item in `failed`. An empty batch yields an empty, fully successful outcome.
    ///
    /// # Arguments
    /// - `store` - Storage collaborator, cloned into each worker
    /// - `items` - Batch to persist; output order is not preserved
    pub async fn submit<T, S>(&self, store: &S, items: Vec<T>) -> BulkOutcome<T, S::Output>
    where
        T: Clone + Send + 'static,
        S: BulkStore<T>,
    {
        let total = items.len();
        let deadline = self.deadline.map(|budget| Instant::now() + budget);
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));

        let mut workers = JoinSet::new();
        let mut pending: HashMap<Id, T> = HashMap::with_capacity(total);

        for item in items {
            let store = store.clone();
            let semaphore = semaphore.clone();
            let owned = item.clone();

            let handle = workers.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| DbErr::Custom(format!("bulk worker permit: {}", e)))?;

                store.create(owned).await
            });

            pending.insert(handle.id(), item);
        }

        tracing::debug!(
            "Bulk batch of {} items spawned (max in flight {})",
            total,
            self.max_in_flight
        );

        let mut outcome = BulkOutcome::default();

        loop {
            let joined = match deadline {
                Some(deadline) => {
                    match tokio::time::timeout_at(deadline, workers.join_next_with_id()).await {
                        Ok(joined) => joined,
                        Err(_) => {
                            tracing::warn!(
                                "Bulk batch deadline elapsed with {} of {} items unconfirmed",
                                workers.len(),
                                total
                            );
                            workers.abort_all();
                            break;
                        }
                    }
                }
                None => workers.join_next_with_id().await,
            };

            let Some(joined) = joined else {
                break;
            };

            record(&mut outcome, &mut pending, joined);
        }

        // Drain after an abort; tasks that completed in the meantime keep their result.
        while let Some(joined) = workers.join_next_with_id().await {
            record(&mut outcome, &mut pending, joined);
        }

        tracing::info!(
            "Bulk batch finished: {} added, {} failed of {}",
            outcome.added.len(),
            outcome.failed.len(),
            total
        );

        outcome
    }
}

/// Folds one worker completion into the outcome.
fn record<T, O>(
    outcome: &mut BulkOutcome<T, O>,
    pending: &mut HashMap<Id, T>,
    joined: Result<(Id, Result<O, DbErr>), JoinError>,
) {
    match joined {
        Ok((id, Ok(stored))) => {
            pending.remove(&id);
            outcome.added.push(stored);
        }
        Ok((id, Err(err))) => {
            if let Some(item) = pending.remove(&id) {
                let kind = match &err {
                    DbErr::RecordNotFound(_) => BulkFailureKind::NotFound,
                    err if is_unique_violation(err) => BulkFailureKind::Conflict,
                    _ => BulkFailureKind::Persistence,
                };

                tracing::debug!("Bulk item failed ({:?}): {}", kind, err);

                outcome.failed.push(BulkFailure {
                    item,
                    kind,
                    message: err.to_string(),
                });
            }
        }
        Err(err) => {
            if let Some(item) = pending.remove(&err.id()) {
                let (kind, message) = if err.is_cancelled() {
                    (
                        BulkFailureKind::Timeout,
                        "Deadline elapsed before the item was stored".to_string(),
                    )
                } else {
                    tracing::error!("Bulk worker panicked: {}", err);
                    (
                        BulkFailureKind::Persistence,
                        "Worker failed unexpectedly while storing the item".to_string(),
                    )
                };

                outcome.failed.push(BulkFailure {
                    item,
                    kind,
                    message,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::bulk::BulkStatus;
    use std::{
        collections::HashSet,
        sync::atomic::{AtomicUsize, Ordering},
    };

    /// In-memory store whose behaviour per item is scripted by the test.
    #[derive(Clone, Default)]
    struct ScriptedStore {
        failing: Arc<HashSet<u32>>,
        missing: Arc<HashSet<u32>>,
        slow: Arc<HashSet<u32>>,
        panicking: Option<u32>,
        in_flight: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedStore {
        fn failing(items: &[u32]) -> Self {
            Self {
                failing: Arc::new(items.iter().copied().collect()),
                ..Default::default()
            }
        }

        fn slow(items: &[u32]) -> Self {
            Self {
                slow: Arc::new(items.iter().copied().collect()),
                ..Default::default()
            }
        }
    }

    impl BulkStore<u32> for ScriptedStore {
        type Output = u32;

        async fn create(&self, item: u32) -> Result<u32, DbErr> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            let delay = if self.slow.contains(&item) {
                Duration::from_secs(60)
            } else {
                Duration::from_millis(100)
            };
            tokio::time::sleep(delay).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.panicking == Some(item) {
                panic!("storage exploded on item {}", item);
            }
            if self.failing.contains(&item) {
                return Err(DbErr::Custom(format!("item {} rejected", item)));
            }
            if self.missing.contains(&item) {
                return Err(DbErr::RecordNotFound(format!("item {} unknown", item)));
            }
            Ok(item * 10)
        }
    }

    fn sorted(mut values: Vec<u32>) -> Vec<u32> {
        values.sort_unstable();
        values
    }

    #[tokio::test(start_paused = true)]
    async fn empty_batch_succeeds_with_empty_lists() {
        let outcome = BulkCoordinator::new(4)
            .submit(&ScriptedStore::default(), Vec::new())
            .await;

        assert!(outcome.added.is_empty());
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.status(), BulkStatus::AllSucceeded);
    }

    #[tokio::test(start_paused = true)]
    async fn stores_every_item() {
        let outcome = BulkCoordinator::new(4)
            .submit(&ScriptedStore::default(), vec![1, 2, 3, 4, 5])
            .await;

        assert_eq!(sorted(outcome.added.clone()), vec![10, 20, 30, 40, 50]);
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.status(), BulkStatus::AllSucceeded);
    }

    #[tokio::test(start_paused = true)]
    async fn failures_stay_with_their_items() {
        let store = ScriptedStore::failing(&[2, 4]);

        let outcome = BulkCoordinator::new(4)
            .submit(&store, vec![1, 2, 3, 4, 5])
            .await;

        assert_eq!(sorted(outcome.added.clone()), vec![10, 30, 50]);
        let failed_items = sorted(outcome.failed.iter().map(|f| f.item).collect());
        assert_eq!(failed_items, vec![2, 4]);
        for failure in &outcome.failed {
            assert_eq!(failure.kind, BulkFailureKind::Persistence);
            assert!(failure.message.contains(&format!("item {} rejected", failure.item)));
        }
        assert_eq!(outcome.status(), BulkStatus::Partial);
    }

    #[tokio::test(start_paused = true)]
    async fn all_failing_yields_all_failed() {
        let store = ScriptedStore::failing(&[1, 2, 3]);

        let outcome = BulkCoordinator::new(2).submit(&store, vec![1, 2, 3]).await;

        assert!(outcome.added.is_empty());
        assert_eq!(outcome.failed.len(), 3);
        assert_eq!(outcome.status(), BulkStatus::AllFailed);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_items_are_processed_independently() {
        let outcome = BulkCoordinator::new(4)
            .submit(&ScriptedStore::default(), vec![7, 7, 7])
            .await;

        assert_eq!(outcome.added, vec![70, 70, 70]);
    }

    #[tokio::test(start_paused = true)]
    async fn respects_in_flight_cap() {
        let store = ScriptedStore::default();

        let outcome = BulkCoordinator::new(3)
            .submit(&store, (1..=20).collect())
            .await;

        assert_eq!(outcome.added.len(), 20);
        let peak = store.peak.load(Ordering::SeqCst);
        assert!(peak <= 3, "peak concurrency {} exceeded the cap", peak);
        assert!(peak >= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_times_out_slow_items_only() {
        let store = ScriptedStore::slow(&[3]);

        let outcome = BulkCoordinator::new(4)
            .with_deadline(Duration::from_secs(5))
            .submit(&store, vec![1, 2, 3, 4])
            .await;

        assert_eq!(sorted(outcome.added.clone()), vec![10, 20, 40]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].item, 3);
        assert_eq!(outcome.failed[0].kind, BulkFailureKind::Timeout);
        assert_eq!(outcome.status(), BulkStatus::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn queued_items_time_out_before_reaching_storage() {
        let store = ScriptedStore::slow(&[3, 4]);

        let outcome = BulkCoordinator::new(1)
            .with_deadline(Duration::from_secs(5))
            .submit(&store, vec![3, 4])
            .await;

        assert!(outcome.added.is_empty());
        assert_eq!(outcome.failed.len(), 2);
        assert!(outcome
            .failed
            .iter()
            .all(|failure| failure.kind == BulkFailureKind::Timeout));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_record_is_not_found() {
        let store = ScriptedStore {
            missing: Arc::new([2].into_iter().collect()),
            ..Default::default()
        };

        let outcome = BulkCoordinator::new(4).submit(&store, vec![1, 2]).await;

        assert_eq!(outcome.added, vec![10]);
        assert_eq!(outcome.failed[0].item, 2);
        assert_eq!(outcome.failed[0].kind, BulkFailureKind::NotFound);
        assert_eq!(outcome.status(), BulkStatus::Partial);
    }

    #[tokio::test(start_paused = true)]
    async fn generous_deadline_does_not_time_out() {
        let outcome = BulkCoordinator::new(4)
            .with_deadline(Duration::from_secs(30))
            .submit(&ScriptedStore::default(), vec![1, 2, 3])
            .await;

        assert_eq!(outcome.added.len(), 3);
        assert_eq!(outcome.status(), BulkStatus::AllSucceeded);
    }

    #[tokio::test(start_paused = true)]
    async fn panicking_worker_becomes_one_failure() {
        let store = ScriptedStore {
            panicking: Some(2),
            ..Default::default()
        };

        let outcome = BulkCoordinator::new(4).submit(&store, vec![1, 2, 3]).await;

        assert_eq!(sorted(outcome.added.clone()), vec![10, 30]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].item, 2);
        assert_eq!(outcome.failed[0].kind, BulkFailureKind::Persistence);
    }

    #[tokio::test(start_paused = true)]
    async fn every_item_is_accounted_for_exactly_once() {
        for n in [0u32, 1, 2, 7, 33] {
            let failing: Vec<u32> = (1..=n).filter(|i| i % 3 == 0).collect();
            let store = ScriptedStore::failing(&failing);

            let outcome = BulkCoordinator::new(5).submit(&store, (1..=n).collect()).await;

            assert_eq!(outcome.len(), n as usize);
            assert_eq!(outcome.failed.len(), failing.len());
        }
    }

    #[test]
    fn zero_cap_is_raised_to_one() {
        let coordinator = BulkCoordinator::new(0);
        assert_eq!(coordinator.max_in_flight, 1);
    }

    #[test]
    fn rejects_oversized_batch() {
        let settings = BulkSettings {
            max_in_flight: 4,
            max_items: 2,
            order_timeout: Duration::from_secs(30),
        };

        assert!(settings.ensure_batch_len(2).is_ok());
        assert!(matches!(
            settings.ensure_batch_len(3),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn names_first_invalid_item() {
        let settings = BulkSettings {
            max_in_flight: 4,
            max_items: 10,
            order_timeout: Duration::from_secs(30),
        };
        let even = |item: &u32| {
            if item % 2 == 0 {
                Ok(())
            } else {
                Err(AppError::BadRequest("odd".to_string()))
            }
        };

        assert!(settings.validate_batch(&[2, 4], even).is_ok());
        match settings.validate_batch(&[2, 3, 5], even) {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "Item 1: odd"),
            other => panic!("Expected BadRequest, got: {:?}", other),
        }
    }
}
