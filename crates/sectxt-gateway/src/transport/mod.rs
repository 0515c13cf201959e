//! Transport layer (HTTP).
//!
//! Adapts interceptor decisions to axum middleware.

pub mod http;
