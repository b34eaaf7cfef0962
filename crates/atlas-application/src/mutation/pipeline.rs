use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use atlas_core::config::LatencyConfig;
use atlas_core::error::AtlasError;
use atlas_core::profile::ProfileRepository;

use super::model::{Mutation, MutationKind, MutationOutcome, MutationStatus, Settlement};

#[derive(Debug, Clone)]
enum HandleState {
    Pending,
    Settled(Settlement),
}

/// Caller-side view of one submitted mutation.
///
/// Dropping the handle does not cancel the mutation; it still settles.
#[derive(Debug)]
pub struct MutationHandle {
    ticket: u64,
    kind: MutationKind,
    state: watch::Receiver<HandleState>,
    cancel: CancellationToken,
}

impl MutationHandle {
    /// Submission sequence number, unique per pipeline.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    pub fn status(&self) -> MutationStatus {
        match *self.state.borrow() {
            HandleState::Pending => MutationStatus::Pending,
            HandleState::Settled(_) => MutationStatus::Settled,
        }
    }

    /// The settlement, once available.
    pub fn result(&self) -> Option<Settlement> {
        match &*self.state.borrow() {
            HandleState::Pending => None,
            HandleState::Settled(settlement) => Some(settlement.clone()),
        }
    }

    /// Requests cancellation.
    ///
    /// Takes effect only while the latency window is still running: the
    /// mutation then settles with `AtlasError::Cancelled` and the repository
    /// is never touched. Once the write has started this is a no-op.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Waits until the mutation settles and returns its result.
    pub async fn settled(&self) -> Settlement {
        let mut state = self.state.clone();
        let settled = state
            .wait_for(|s| matches!(s, HandleState::Settled(_)))
            .await
            .map_err(|_| AtlasError::internal("mutation task ended without settling"))?;

        match &*settled {
            HandleState::Settled(settlement) => settlement.clone(),
            HandleState::Pending => Err(AtlasError::internal("mutation still pending")),
        }
    }
}

/// Wraps repository writes in a simulated network round-trip.
///
/// Each [`submit`](Self::submit) schedules a deferred task that sleeps for the
/// configured latency and then performs the write. Until then, reads of the
/// repository observe the pre-mutation state. Submissions are independent:
/// a second submit never cancels or waits for the first, and settle order
/// follows delay expiry rather than submission order.
pub struct MutationPipeline {
    repository: Arc<dyn ProfileRepository>,
    latency: LatencyConfig,
    next_ticket: AtomicU64,
    in_flight: Arc<AtomicUsize>,
    settled: Arc<AtomicUsize>,
}

impl MutationPipeline {
    pub fn new(repository: Arc<dyn ProfileRepository>, latency: LatencyConfig) -> Self {
        Self {
            repository,
            latency,
            next_ticket: AtomicU64::new(1),
            in_flight: Arc::new(AtomicUsize::new(0)),
            settled: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    fn delay_for(&self, kind: MutationKind) -> Duration {
        match kind {
            MutationKind::Create => self.latency.create(),
            MutationKind::Update => self.latency.update(),
            MutationKind::Delete => self.latency.delete(),
        }
    }

    /// Schedules `mutation` and returns immediately with a pending handle.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, mutation: Mutation) -> MutationHandle {
        let kind = mutation.kind();
        let delay = self.delay_for(kind);
        self.submit_after(mutation, delay)
    }

    /// Like [`submit`](Self::submit) with an explicit latency window.
    pub fn submit_after(&self, mutation: Mutation, delay: Duration) -> MutationHandle {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        let kind = mutation.kind();
        let (tx, rx) = watch::channel(HandleState::Pending);
        let cancel = CancellationToken::new();

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            ticket,
            %kind,
            target = mutation.target_id().unwrap_or("-"),
            delay_ms = delay.as_millis() as u64,
            "Mutation submitted"
        );

        let repository = self.repository.clone();
        let in_flight = self.in_flight.clone();
        let settled = self.settled.clone();
        let token = cancel.clone();

        tokio::spawn(async move {
            let settlement = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::warn!(ticket, %kind, "Mutation cancelled before settling");
                    Err(AtlasError::cancelled(kind.to_string()))
                }
                _ = tokio::time::sleep(delay) => apply(repository.as_ref(), mutation).await,
            };

            match &settlement {
                Ok(_) => tracing::debug!(ticket, %kind, "Mutation settled"),
                Err(e) => tracing::debug!(ticket, %kind, error = %e, "Mutation settled with failure"),
            }

            // Count the settlement before leaving the in-flight set so the
            // aggregate status never drops back to idle.
            settled.fetch_add(1, Ordering::SeqCst);
            in_flight.fetch_sub(1, Ordering::SeqCst);
            let _ = tx.send(HandleState::Settled(settlement));
        });

        MutationHandle {
            ticket,
            kind,
            state: rx,
            cancel,
        }
    }

    /// Aggregate status across all submissions of this pipeline.
    ///
    /// `Pending` while any submission is in flight, `Settled` once at least
    /// one has settled and none remain, `Idle` before the first submission.
    pub fn status(&self) -> MutationStatus {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            MutationStatus::Pending
        } else if self.settled.load(Ordering::SeqCst) > 0 {
            MutationStatus::Settled
        } else {
            MutationStatus::Idle
        }
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

async fn apply(repository: &dyn ProfileRepository, mutation: Mutation) -> Settlement {
    match mutation {
        Mutation::Create(form) => Ok(MutationOutcome::Created(repository.create(form).await)),
        Mutation::Update { id, form } => repository
            .update(&id, form)
            .await
            .map(MutationOutcome::Updated),
        Mutation::Delete { id } => {
            let removed = repository.delete(&id).await;
            Ok(MutationOutcome::Deleted { id, removed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::profile::{Profile, ProfileFormData};
    use atlas_infrastructure::InMemoryProfileRepository;

    fn form(name: &str) -> ProfileFormData {
        ProfileFormData {
            name: name.to_string(),
            ..ProfileFormData::default()
        }
    }

    fn setup() -> (Arc<InMemoryProfileRepository>, MutationPipeline) {
        let repository = Arc::new(InMemoryProfileRepository::new());
        let pipeline = MutationPipeline::new(repository.clone(), LatencyConfig::default());
        (repository, pipeline)
    }

    async fn seed(repository: &InMemoryProfileRepository, name: &str) -> Profile {
        repository.create(form(name)).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_is_pending_until_latency_elapses() {
        let (repository, pipeline) = setup();
        assert_eq!(pipeline.status(), MutationStatus::Idle);

        let handle = pipeline.submit(Mutation::Create(form("Ana")));
        assert_eq!(handle.status(), MutationStatus::Pending);
        assert_eq!(pipeline.status(), MutationStatus::Pending);

        // Reads before settlement see the pre-mutation state.
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(repository.list().await.is_empty());
        assert_eq!(handle.status(), MutationStatus::Pending);

        let outcome = handle.settled().await.unwrap();
        let created = outcome.profile().unwrap().clone();
        assert_eq!(created.name, "Ana");
        assert_eq!(handle.status(), MutationStatus::Settled);
        assert_eq!(pipeline.status(), MutationStatus::Settled);
        assert_eq!(repository.list().await, vec![created]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_of_missing_id_settles_not_found() {
        let (_repository, pipeline) = setup();

        let handle = pipeline.submit(Mutation::Update {
            id: "missing".into(),
            form: form("Nobody"),
        });

        let err = handle.settled().await.unwrap_err();
        assert!(err.is_not_found());
        assert!(handle.result().unwrap().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_order_follows_delay_not_submission() {
        let (repository, pipeline) = setup();
        let ana = seed(&repository, "Ana").await;
        let ben = seed(&repository, "Ben").await;

        // Update (500ms) submitted first, delete (300ms) second.
        let update = pipeline.submit(Mutation::Update {
            id: ana.id.clone(),
            form: form("Ana2"),
        });
        let delete = pipeline.submit(Mutation::Delete { id: ben.id.clone() });

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(delete.status(), MutationStatus::Settled);
        assert_eq!(update.status(), MutationStatus::Pending);
        assert_eq!(pipeline.status(), MutationStatus::Pending);
        assert_eq!(pipeline.pending_count(), 1);

        let names: Vec<_> = repository.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Ana"]);

        update.settled().await.unwrap();
        assert_eq!(repository.find_by_id(&ana.id).await.unwrap().name, "Ana2");
        assert_eq!(pipeline.status(), MutationStatus::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submissions_are_all_applied() {
        let (repository, pipeline) = setup();

        let handles: Vec<_> = ["A", "B", "C"]
            .into_iter()
            .map(|name| pipeline.submit(Mutation::Create(form(name))))
            .collect();

        let results = futures::future::join_all(handles.iter().map(|h| h.settled())).await;
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(repository.len().await, 3);

        let tickets: Vec<_> = handles.iter().map(|h| h.ticket()).collect();
        assert_eq!(tickets, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_settlement_never_applies() {
        let (repository, pipeline) = setup();
        let ana = seed(&repository, "Ana").await;

        let handle = pipeline.submit(Mutation::Delete { id: ana.id.clone() });
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();

        let err = handle.settled().await.unwrap_err();
        assert!(err.is_cancelled());

        // Let the full latency window pass too.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(repository.find_by_id(&ana.id).await.is_some());
        assert_eq!(pipeline.status(), MutationStatus::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_settlement_is_noop() {
        let (repository, pipeline) = setup();
        let ana = seed(&repository, "Ana").await;

        let handle = pipeline.submit(Mutation::Delete { id: ana.id.clone() });
        let outcome = handle.settled().await.unwrap();
        handle.cancel();

        assert_eq!(
            outcome,
            MutationOutcome::Deleted {
                id: ana.id.clone(),
                removed: true
            }
        );
        assert_eq!(handle.result().unwrap().unwrap(), outcome);
        assert!(repository.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_still_settles() {
        let (repository, pipeline) = setup();

        drop(pipeline.submit(Mutation::Create(form("Ana"))));
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(repository.len().await, 1);
        assert_eq!(pipeline.status(), MutationStatus::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_twice_second_reports_not_removed() {
        let (repository, pipeline) = setup();
        let ana = seed(&repository, "Ana").await;

        let first = pipeline.submit(Mutation::Delete { id: ana.id.clone() });
        let second = pipeline.submit_after(
            Mutation::Delete { id: ana.id.clone() },
            Duration::from_millis(400),
        );

        assert_eq!(
            first.settled().await.unwrap(),
            MutationOutcome::Deleted { id: ana.id.clone(), removed: true }
        );
        assert_eq!(
            second.settled().await.unwrap(),
            MutationOutcome::Deleted { id: ana.id.clone(), removed: false }
        );
    }
}
