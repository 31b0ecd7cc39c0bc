//! Test helpers and builder patterns for solver tests

use shared::SolverNotification;
use solver::{ChannelSink, Coordinator};
use tokio::sync::mpsc;

use super::fixtures::TestFixtures;

/// Builder for coordinators wired to an observable notification channel
pub struct CoordinatorBuilder {
    result_cap: usize,
}

impl CoordinatorBuilder {
    pub fn new() -> Self {
        Self {
            result_cap: TestFixtures::DEFAULT_RESULT_CAP,
        }
    }

    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.result_cap = result_cap;
        self
    }

    /// Build the coordinator together with the receiver observing its sink
    pub fn build(
        self,
    ) -> (
        Coordinator<ChannelSink>,
        mpsc::UnboundedReceiver<SolverNotification>,
    ) {
        let (sink, rx) = ChannelSink::new();
        (Coordinator::with_result_cap(sink, self.result_cap), rx)
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Drain notifications until the terminal completion or error event,
    /// returning it together with the progress values seen on the way
    pub async fn drain_until_terminal(
        rx: &mut mpsc::UnboundedReceiver<SolverNotification>,
    ) -> (SolverNotification, Vec<u8>) {
        let mut progress = Vec::new();
        loop {
            match rx.recv().await.expect("notification stream ended early") {
                SolverNotification::Progress { value } => progress.push(value),
                terminal => return (terminal, progress),
            }
        }
    }

    /// Unwrap a completion notification into its ranked result list
    pub fn completion_results(terminal: SolverNotification) -> Vec<shared::Combination> {
        match terminal {
            SolverNotification::Complete { results, value } => {
                assert_eq!(value, 100, "completion must carry progress 100");
                results
            }
            other => panic!("expected completion notification, got {other:?}"),
        }
    }

    /// The per-item prices of one combination, in insertion order
    pub fn prices_of(combination: &shared::Combination) -> Vec<u64> {
        combination.items.iter().map(|item| item.price).collect()
    }

    /// Wait for the coordinator to return to Idle
    pub async fn wait_until_idle(coordinator: &Coordinator<ChannelSink>) {
        for _ in 0..200 {
            if !coordinator.is_busy() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("coordinator stayed busy");
    }
}
