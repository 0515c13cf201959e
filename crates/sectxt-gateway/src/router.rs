//! Axum router wiring.
//!
//! The security.txt interceptor runs as middleware in front of every route,
//! including the fallback, so host routes added here never shadow it.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            transport::http::security_txt,
        ))
        .with_state(state)
}
