//! Client-side list management: the projection pipeline, page controls and the
//! owned state object that ties them together.

pub mod pages;
pub mod projection;
pub mod state;

pub use pages::*;
pub use projection::*;
pub use state::*;
