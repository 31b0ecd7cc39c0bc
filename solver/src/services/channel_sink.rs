//! Channel-backed notification sink for embedders and tests

use crate::traits::NotificationSink;
use async_trait::async_trait;
use shared::SolverNotification;
use tokio::sync::mpsc;
use tracing::debug;

/// Sink delivering notifications into a tokio unbounded channel.
///
/// Sends never block; if the receiver has been dropped the event is
/// discarded, the in-flight search keeps running.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SolverNotification>,
}

impl ChannelSink {
    /// Create a sink together with the receiving end of its channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SolverNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotificationSink for ChannelSink {
    async fn notify(&self, notification: SolverNotification) {
        if self.tx.send(notification).is_err() {
            debug!("notification receiver dropped, discarding event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_in_order() {
        let (sink, mut rx) = ChannelSink::new();

        sink.notify(SolverNotification::progress(10)).await;
        sink.notify(SolverNotification::complete(vec![])).await;

        assert!(matches!(rx.recv().await, Some(SolverNotification::Progress { value: 10 })));
        assert!(matches!(rx.recv().await, Some(SolverNotification::Complete { .. })));
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_swallowed() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);

        // Must neither panic nor error
        sink.notify(SolverNotification::progress(50)).await;
    }
}
