//! # Inventory Admin
//!
//! > **Administration for a product inventory held by a REST service.**
//!
//! List, search, filter, paginate, create, edit and delete products. The crate
//! keeps a client-side mirror of the record set and derives every view from it
//! with pure functions; the network is only touched to load the set and to apply
//! confirmed changes.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`validation`])
//! - **Role**: Products, categories, stock buckets, and the rules a form must pass
//!   before anything is sent.
//! - **Key items**: [`Product`](model::Product), [`validate`](validation::validate).
//!
//! ### 2. The Pipeline ([`listing`])
//! - **Role**: Search + category + stock filters, then pagination, recomputed
//!   synchronously after every change.
//! - **Key items**: [`project`](listing::project), [`ListState`](listing::ListState).
//!
//! ### 3. The Engine ([`framework`], [`store`])
//! - **Role**: A single actor owns the store backend and serves requests one at
//!   a time; clients talk to it over channels.
//! - **Key items**: [`StoreActor`](framework::StoreActor),
//!   [`StoreClient`](framework::StoreClient), [`HttpStore`](store::HttpStore).
//!
//! ### 4. The Screens ([`screen`])
//! - **Role**: Loading flags, pending confirmations, field errors and notices for
//!   the list and form views.
//! - **Key items**: [`ProductListScreen`](screen::ProductListScreen),
//!   [`ProductForm`](screen::ProductForm).
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Picks a backend, spawns the actor, shuts it down.
//! - **Key items**: [`InventorySystem`](lifecycle::InventorySystem).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Against a running service
//! INVENTORY_API_URL=http://localhost:5000/api inventory list --stock low-stock
//!
//! # With a seeded in-memory store
//! RUST_LOG=info inventory --memory list --page-size 5 --page 2
//! ```

pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod listing;
pub mod model;
pub mod screen;
pub mod store;
pub mod validation;
