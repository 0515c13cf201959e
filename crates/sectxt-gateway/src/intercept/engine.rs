use bytes::Bytes;

use sectxt_core::error::Result;
use sectxt_core::{render_with, DiagnosticsSink, PolicyConfig, RenderOptions, TracingSink};

/// Standard location of the document.
pub const CANONICAL_PATH: &str = "/.well-known/security.txt";
/// Pre-standard location, redirected to `CANONICAL_PATH`.
pub const LEGACY_PATH: &str = "/security.txt";

pub const CONTENT_TYPE: &str = "text/plain";

/// What to do with one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// 200 with the rendered document.
    Serve(Bytes),
    Redirect { status: u16, location: &'static str },
    /// Not ours; hand over to the rest of the pipeline.
    Pass,
}

/// Rendered `security.txt` plus the request-matching rules.
/// Construct once at startup, then clone freely (the body is shared).
#[derive(Debug, Clone)]
pub struct SecurityTxt {
    body: Bytes,
}

impl SecurityTxt {
    /// Render with the default profile; deprecation warnings go to `tracing`.
    pub fn setup(config: &PolicyConfig) -> Result<Self> {
        Self::setup_with(config, RenderOptions::default(), &TracingSink)
    }

    pub fn setup_with(
        config: &PolicyConfig,
        options: RenderOptions,
        sink: &dyn DiagnosticsSink,
    ) -> Result<Self> {
        let text = render_with(config, options, sink)?;
        tracing::info!(
            bytes = text.len(),
            lines = text.lines().count(),
            profile = ?options.profile,
            "security.txt rendered"
        );
        Ok(Self {
            body: Bytes::from(text),
        })
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn decide(&self, method: &str, path: &str) -> Decision {
        if !method.eq_ignore_ascii_case("GET") {
            return Decision::Pass;
        }
        match path {
            LEGACY_PATH => {
                tracing::debug!(path, location = CANONICAL_PATH, "security.txt redirect");
                Decision::Redirect {
                    status: 301,
                    location: CANONICAL_PATH,
                }
            }
            CANONICAL_PATH => {
                tracing::debug!(path, "security.txt served");
                Decision::Serve(self.body.clone())
            }
            _ => Decision::Pass,
        }
    }
}
