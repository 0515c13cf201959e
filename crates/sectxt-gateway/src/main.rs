//! sectxt gateway
//!
//! Serves `/.well-known/security.txt` (and redirects `/security.txt`) from the
//! `policy` section of `sectxt.yaml`. The config path may be given as the
//! first argument.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use sectxt_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "sectxt-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> sectxt_core::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "sectxt.yaml".to_string());

    // Strict parsing + policy validation; an invalid policy never gets served.
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "sectxt-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| sectxt_core::SecTxtError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| sectxt_core::SecTxtError::Internal(format!("server failed: {e}")))
}
