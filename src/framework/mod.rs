//! Actor plumbing between the screens and the record store.
//!
//! # Main Components
//!
//! - [`RecordStore`] - Trait that store backends implement
//! - [`StoreActor`] - Owns a backend and serves requests one at a time
//! - [`StoreClient`] - Cloneable handle for sending requests to the actor
//! - [`StoreRequest`] - The message enum carried over the channel
//!
//! # Testing
//!
//! See [`mock`] module for a scripted store that needs no backend.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
