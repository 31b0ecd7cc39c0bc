//! Line-delimited JSON sink writing to the process stdout
//!
//! The solver binary speaks newline-delimited JSON on stdout: one document
//! per acknowledgment or notification. Acks and notifications come from
//! different tasks, so all writes go through one shared handle and take a
//! lock for the duration of a line.

use crate::traits::NotificationSink;
use async_trait::async_trait;
use serde::Serialize;
use shared::{SolverAck, SolverNotification};
use std::sync::Arc;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::debug;

/// Sink serializing every event as one JSON line on stdout
#[derive(Debug, Clone)]
pub struct StdoutSink {
    stdout: Arc<Mutex<Stdout>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: Arc::new(Mutex::new(tokio::io::stdout())),
        }
    }

    /// Write the synchronous acknowledgment for one request
    pub async fn send_ack(&self, ack: &SolverAck) {
        self.write_json(ack).await;
    }

    async fn write_json<T: Serialize>(&self, value: &T) {
        let mut line = match serde_json::to_string(value) {
            Ok(line) => line,
            Err(e) => {
                debug!(error = %e, "failed to serialize outbound message, discarding");
                return;
            }
        };
        line.push('\n');

        let mut stdout = self.stdout.lock().await;
        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            debug!(error = %e, "stdout write failed, discarding event");
            return;
        }
        if let Err(e) = stdout.flush().await {
            debug!(error = %e, "stdout flush failed");
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for StdoutSink {
    async fn notify(&self, notification: SolverNotification) {
        self.write_json(&notification).await;
    }
}
