//! Message types for the price-combination solver
//!
//! One module per direction of traffic:
//! - `solver`: caller → solver requests and the synchronous acknowledgment
//! - `notify`: solver → caller progress, completion, and failure events

pub mod notify;
pub mod solver;

pub use notify::SolverNotification;
pub use solver::{SolverAck, SolverRequest};
