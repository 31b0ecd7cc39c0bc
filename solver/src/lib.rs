//! Price-combination solver
//!
//! Searches a catalog of priced items for a small set of near-optimal
//! subsets whose combined price meets or approaches a caller-supplied
//! target. The frontier search trades exact optimality for bounded memory
//! and latency; the coordinator serializes invocations and reports results
//! through a swappable notification sink.

pub mod coordinator;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use coordinator::Coordinator;
pub use core::{search, select, Frontier, DEFAULT_RESULT_CAP};
pub use error::{SolverError, SolverResult};
pub use services::{ChannelSink, StdoutSink};
pub use traits::NotificationSink;
