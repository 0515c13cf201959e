//! Shared application state for the sectxt gateway.

use std::sync::Arc;

use sectxt_core::error::Result;
use sectxt_core::{RenderOptions, TracingSink};

use crate::config::GatewayConfig;
use crate::intercept::SecurityTxt;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    security_txt: SecurityTxt,
}

impl AppState {
    /// Build application state; renders the policy once.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &GatewayConfig) -> Result<Self> {
        let options = RenderOptions {
            profile: cfg.profile,
        };
        let security_txt = SecurityTxt::setup_with(&cfg.policy, options, &TracingSink)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { security_txt }),
        })
    }

    pub fn security_txt(&self) -> &SecurityTxt {
        &self.inner.security_txt
    }
}
