//! Shared types for the price-combination solver
//!
//! Contains the wire-level types exchanged between the solver and its
//! caller. Solver-internal types (the frontier, progress bookkeeping)
//! live in the solver crate.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the caller-facing message contract
pub use messages::{SolverAck, SolverNotification, SolverRequest};
