//! Notification sink implementations

pub mod channel_sink;
pub mod stdout_sink;

pub use channel_sink::*;
pub use stdout_sink::*;
