//! Execution guard serializing search invocations
//!
//! One search runs at a time, process-wide. The guard owns the Idle/Running
//! state: entry happens synchronously inside `start` so a caller that is
//! told "accepted" has already claimed the slot, exit happens exactly once
//! per accepted start after the completion or failure notification has been
//! offered to the sink.

use crate::core::{search, select, DEFAULT_RESULT_CAP};
use crate::error::{SolverError, SolverResult};
use crate::traits::NotificationSink;
use shared::{Combination, Item, SearchId, SolverAck, SolverNotification, SolverRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Serializes searches and reports their outcome through the sink
pub struct Coordinator<S: NotificationSink + 'static> {
    sink: Arc<S>,
    busy: Arc<AtomicBool>,
    result_cap: usize,
}

impl<S: NotificationSink + 'static> Coordinator<S> {
    /// Create a coordinator with the default result cap
    pub fn new(sink: S) -> Self {
        Self::with_result_cap(sink, DEFAULT_RESULT_CAP)
    }

    /// Create a coordinator returning at most `result_cap` combinations
    pub fn with_result_cap(sink: S, result_cap: usize) -> Self {
        Self {
            sink: Arc::new(sink),
            busy: Arc::new(AtomicBool::new(false)),
            result_cap,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Dispatch one caller request to the matching operation
    pub fn handle(&self, request: SolverRequest) -> SolverAck {
        match request {
            SolverRequest::FindCombinations { items, target } => self.start(items, target),
        }
    }

    /// Accept or reject a search synchronously.
    ///
    /// On acceptance the pipeline runs on a background task and concludes
    /// with exactly one completion or failure notification; the caller is
    /// never blocked on the computation. A rejected call leaves any
    /// in-flight search untouched.
    pub fn start(&self, items: Vec<Item>, target: i64) -> SolverAck {
        let target = match validate(&items, target) {
            Ok(target) => target,
            Err(e) => return SolverAck::rejected(e.to_string()),
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SolverAck::rejected(SolverError::Busy.to_string());
        }

        let search_id = SearchId::new();
        info!(%search_id, item_count = items.len(), target, "search accepted");

        let sink = Arc::clone(&self.sink);
        let busy = Arc::clone(&self.busy);
        let result_cap = self.result_cap;

        tokio::spawn(async move {
            match run_pipeline(&items, target, result_cap, sink.as_ref()).await {
                Ok(results) => {
                    info!(%search_id, results = results.len(), "search complete");
                    sink.notify(SolverNotification::complete(results)).await;
                }
                Err(e) => {
                    warn!(%search_id, error = %e, "search failed");
                    sink.notify(SolverNotification::error(e.to_string())).await;
                }
            }

            // Exactly one Running -> Idle transition per accepted start,
            // on success and failure alike; the sink has already swallowed
            // any delivery problem.
            busy.store(false, Ordering::Release);
        });

        SolverAck::accepted()
    }
}

fn validate(items: &[Item], target: i64) -> SolverResult<u64> {
    if items.is_empty() {
        return Err(SolverError::InvalidInput {
            message: "item list is missing or empty".to_string(),
        });
    }
    if target <= 0 {
        return Err(SolverError::InvalidInput {
            message: format!("target must be a positive integer, got {target}"),
        });
    }
    Ok(target as u64)
}

async fn run_pipeline<S: NotificationSink>(
    items: &[Item],
    target: u64,
    result_cap: usize,
    sink: &S,
) -> SolverResult<Vec<Combination>> {
    let frontier = search(items, target, sink).await?;
    Ok(select(&frontier, target, result_cap))
}
