//! Solver → caller notifications
//!
//! All three variants are asynchronous and fire-and-forget: delivery
//! failure must never reach back into the solver.

use crate::types::Combination;
use serde::{Deserialize, Serialize};

/// Progress values are clamped here; 100 is reserved for completion
pub const PROGRESS_CEILING: u8 = 95;

/// Notifications emitted while a search runs and when it concludes.
///
/// Exactly one of `Complete`/`Error` follows every accepted request,
/// preceded by zero or more `Progress` events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolverNotification {
    #[serde(rename = "progress")]
    Progress { value: u8 },

    #[serde(rename = "complete")]
    Complete { results: Vec<Combination>, value: u8 },

    #[serde(rename = "error")]
    Error { message: String },
}

impl SolverNotification {
    /// Completion event carrying the ranked result list
    pub fn complete(results: Vec<Combination>) -> Self {
        Self::Complete {
            results,
            value: 100,
        }
    }

    /// Progress event, clamped to the ceiling
    pub fn progress(value: u8) -> Self {
        Self::Progress {
            value: value.min(PROGRESS_CEILING),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
