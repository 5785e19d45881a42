//! Presentation state: what a front end needs to hold between user actions.
//!
//! Screens own their state and a [`StoreClient`](crate::framework::StoreClient).
//! Actions that reach the store are `async fn(&mut self)`, so a screen cannot
//! start a second action while one is awaiting the store.

pub mod form;
pub mod list;
pub mod notice;

pub use form::*;
pub use list::*;
pub use notice::*;
