//! Step counting and progress reporting for a running search

use crate::traits::NotificationSink;
use shared::messages::notify::PROGRESS_CEILING;
use shared::SolverNotification;

/// Steps between progress notifications
pub const SAMPLE_INTERVAL: u64 = 1_000;

/// Counts (item × frontier entry) steps and emits sampled progress events,
/// normalized against the expected `items × target` step total.
#[derive(Debug)]
pub struct ProgressTracker {
    steps: u64,
    expected: u64,
}

impl ProgressTracker {
    pub fn new(item_count: usize, target: u64) -> Self {
        Self {
            steps: 0,
            expected: (item_count as u64).saturating_mul(target).max(1),
        }
    }

    /// Record one inner-loop step, emitting a notification on every
    /// `SAMPLE_INTERVAL`th step
    pub async fn step<S: NotificationSink + ?Sized>(&mut self, sink: &S) {
        self.steps += 1;

        if self.steps % SAMPLE_INTERVAL == 0 {
            sink.notify(SolverNotification::progress(self.value())).await;
        }
    }

    /// Current progress percentage, clamped below 100 while running; the
    /// completion notification owns 100
    pub fn value(&self) -> u8 {
        (self.steps.saturating_mul(100) / self.expected).min(PROGRESS_CEILING as u64) as u8
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}
