//! Caller → solver requests and the synchronous acknowledgment

use crate::errors::{SharedError, SharedResult};
use crate::types::Item;
use serde::{Deserialize, Serialize};

/// Requests accepted by the solver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum SolverRequest {
    /// Search the catalog for combinations meeting or approaching `target`
    #[serde(rename = "findCombinations")]
    FindCombinations { items: Vec<Item>, target: i64 },
}

impl SolverRequest {
    /// Parse one request from its wire form
    pub fn from_json(raw: &str) -> SharedResult<Self> {
        serde_json::from_str(raw).map_err(|e| SharedError::ProtocolError {
            message: e.to_string(),
        })
    }
}

/// Synchronous acknowledgment returned for every request.
///
/// `{"success": true}` when the search was accepted, `{"error": "..."}` when
/// it was rejected for being busy or for malformed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolverAck {
    Accepted { success: bool },
    Rejected { error: String },
}

impl SolverAck {
    pub fn accepted() -> Self {
        Self::Accepted { success: true }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            error: reason.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { success: true })
    }
}
