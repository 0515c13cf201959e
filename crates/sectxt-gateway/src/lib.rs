//! sectxt gateway library entry.
//!
//! Serves the rendered `security.txt` over HTTP: config loading, the request
//! interceptor, its axum adapter and the router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod intercept;
pub mod ops;
pub mod router;
pub mod transport;
