//! # Generic Resource Container
//!
//! [`ResourceStore`] is the server half of the slice pattern: a task that
//! owns one resource's [`ResourceState`] and processes requests from its
//! clients sequentially. Because the state lives inside a single task, reads
//! and writes need no locking.
//!
//! ## Phase transitions
//!
//! Every dispatched operation follows the same three phases:
//!
//! - **pending** — `is_loading` set, `error` cleared, the backend call
//!   spawned into its own task so the container stays responsive;
//! - **fulfilled** — the operation's merge rule applied, `error` cleared;
//! - **rejected** — the failure message stored in `error`, data untouched.
//!
//! ## Stale results
//!
//! Dispatches are numbered with a per-container generation counter. A
//! settlement only touches shared state when its generation is the latest
//! one dispatched; a superseded in-flight operation's late result is
//! detected and dropped. The superseded caller still receives its own
//! settlement `Result`, so awaited sequencing keeps working. `is_loading`
//! tracks an in-flight count, staying true until the last outstanding
//! operation settles.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::RequestError;
use crate::message::{Operation, Outcome, Settlement, StoreRequest};
use crate::state::ResourceState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A settled operation on its way back into the container task.
struct Settled<T: StoreEntity> {
    generation: u64,
    outcome: Result<Outcome<T>, RequestError>,
    respond_to: Settlement,
}

/// The generic container managing one resource's mirrored state.
pub struct ResourceStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: ResourceState<T>,
    /// Latest dispatched generation; settlements from older generations are
    /// dropped without touching state.
    generation: u64,
    in_flight: usize,
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Create the container and a cloneable client for it.
    pub fn new(capacity: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let store = Self {
            receiver,
            state: ResourceState::new(),
            generation: 0,
            in_flight: 0,
        };
        (store, StoreClient::new(sender))
    }

    /// Run the container's event loop until every client is dropped.
    ///
    /// The `context` (the backend handle) is injected here rather than at
    /// construction, so all containers can share one backend created after
    /// the stores themselves.
    pub async fn run(mut self, context: T::Context) {
        let resource = resource_name::<T>();
        info!(resource, "store started");

        let context = Arc::new(context);
        let (settle_tx, mut settle_rx) = mpsc::unbounded_channel::<Settled<T>>();

        loop {
            tokio::select! {
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle_request(request, resource, &context, &settle_tx),
                    None => break,
                },
                Some(settled) = settle_rx.recv() => {
                    self.handle_settled(settled, resource);
                }
            }
        }

        // Clients are gone, but dispatched operations still run to
        // completion; drain their settlements before shutting down.
        while self.in_flight > 0 {
            match settle_rx.recv().await {
                Some(settled) => self.handle_settled(settled, resource),
                None => break,
            }
        }

        info!(resource, items = self.state.items.len(), "store shutdown");
    }

    fn handle_request(
        &mut self,
        request: StoreRequest<T>,
        resource: &'static str,
        context: &Arc<T::Context>,
        settle_tx: &mpsc::UnboundedSender<Settled<T>>,
    ) {
        match request {
            StoreRequest::Dispatch { op, respond_to } => {
                self.generation += 1;
                self.in_flight += 1;
                self.state.is_loading = true;
                self.state.error = None;

                let generation = self.generation;
                debug!(resource, generation, op = op.kind(), "dispatch");

                let context = Arc::clone(context);
                let settle_tx = settle_tx.clone();
                tokio::spawn(async move {
                    let outcome = run_operation::<T>(op, &context).await;
                    // The container may have shut down while the request was
                    // in flight; the settlement is then answered nowhere.
                    let _ = settle_tx.send(Settled {
                        generation,
                        outcome,
                        respond_to,
                    });
                });
            }
            StoreRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.state.clone());
            }
            StoreRequest::ClearError { respond_to } => {
                self.state.error = None;
                let _ = respond_to.send(());
            }
        }
    }

    fn handle_settled(&mut self, settled: Settled<T>, resource: &'static str) {
        let Settled {
            generation,
            outcome,
            respond_to,
        } = settled;

        self.in_flight -= 1;
        self.state.is_loading = self.in_flight > 0;

        let current = generation == self.generation;
        let result = match outcome {
            Ok(applied) => {
                if current {
                    debug!(resource, generation, "fulfilled");
                    self.state.apply(applied);
                    self.state.error = None;
                } else {
                    debug!(resource, generation, latest = self.generation, "stale result dropped");
                }
                Ok(())
            }
            Err(err) => {
                if current {
                    warn!(resource, generation, error = %err, "rejected");
                    self.state.error = Some(err.to_string());
                } else {
                    debug!(resource, generation, latest = self.generation, "stale failure dropped");
                }
                Err(err)
            }
        };

        let _ = respond_to.send(result);
    }
}

async fn run_operation<T: StoreEntity>(
    op: Operation<T>,
    ctx: &T::Context,
) -> Result<Outcome<T>, RequestError> {
    match op {
        Operation::FetchList => T::fetch_list(ctx).await.map(Outcome::List),
        Operation::FetchOne(id) => T::fetch_one(ctx, &id).await.map(Outcome::One),
        Operation::Create(params) => T::create(ctx, params).await.map(Outcome::Created),
        Operation::Update(id, params) => T::update(ctx, &id, params).await.map(Outcome::Updated),
        Operation::Delete(id) => T::delete(ctx, &id).await.map(|_| Outcome::Deleted(id)),
        Operation::Query(query) => T::query(ctx, query).await.map(Outcome::Query),
    }
}

/// Short type name for structured logging, e.g. "Category" instead of
/// "storefront_store::model::category::Category".
fn resource_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("Unknown")
}
