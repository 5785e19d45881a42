//! Starting, stopping and observing the system.

pub mod system;
pub mod tracing;

pub use system::*;
