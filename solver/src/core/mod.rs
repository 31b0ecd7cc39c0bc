//! Core search pipeline
//!
//! `search` builds the frontier of reachable price sums, `select` ranks it
//! into the result list, `ProgressTracker` reports sampled progress along
//! the way.

pub mod frontier;
pub mod progress;
pub mod search;
pub mod select;

pub use frontier::{Frontier, MAX_ENTRIES, RETAIN_ENTRIES};
pub use progress::ProgressTracker;
pub use search::{prune_ceiling, search};
pub use select::{select, DEFAULT_RESULT_CAP};
