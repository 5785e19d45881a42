//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber for the
//! `inventory` binary.
//!
//! ## Configuration
//!
//! - **Filter** from the `RUST_LOG` environment variable. Nothing is logged when it
//!   is unset, so command output stays clean.
//! - **Compact format** without module paths (`with_target(false)`).
//! - **stderr** as the sink. Tables and messages go to stdout, so piping
//!   `inventory list` never mixes in log lines.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: Startup (with the backend name), shutdown and the
//!   number of requests served
//! - **Store Operations**: List, Get, Create, Update and Delete, with ids
//! - **HTTP Exchanges**: Method, URL, status and body size at `debug`
//! - **Screen Actions**: Refresh, delete and submit spans with their outcome
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request outcomes
//! RUST_LOG=info inventory list
//!
//! # Full payloads and HTTP exchanges
//! RUST_LOG=debug inventory add --name "Desk Lamp" --price 24.5 --category Other --stock 3
//! ```
//!
//! With `RUST_LOG=debug` a create looks like:
//!
//! ```text
//! INFO Using HTTP store url=http://localhost:5000/api timeout=10s
//! INFO Store started backend="HttpStore"
//! DEBUG create: Sending request fields=ProductFields { name: "Desk Lamp", price: 24.5, category: Other, stock: 3 }
//! DEBUG Create backend="HttpStore" fields=ProductFields { .. }
//! DEBUG HTTP request method=POST url=http://localhost:5000/api/products
//! DEBUG HTTP response status=201 bytes=164
//! INFO Created backend="HttpStore" id=65a1f0c2e4b0a1b2c3d4e5f6
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
