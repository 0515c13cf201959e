//! Diagnostics sink for non-fatal advisories raised while rendering.

use std::fmt;
use std::sync::Mutex;

/// Advisory raised by the renderer. Never fails a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A deprecated config key was used.
    DeprecatedKey {
        key: &'static str,
        replacement: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DeprecatedKey { key, replacement } => {
                write!(f, "`{key}` is deprecated, use `{replacement}` instead")
            }
        }
    }
}

pub trait DiagnosticsSink {
    fn emit(&self, diag: Diagnostic);
}

/// Default sink: `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&self, diag: Diagnostic) {
        match &diag {
            Diagnostic::DeprecatedKey { key, replacement } => {
                tracing::warn!(key = %key, replacement = %replacement, "{diag}");
            }
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        // Poisoned: the Vec is still consistent.
        match self.seen.lock() {
            Ok(mut g) => std::mem::take(&mut *g),
            Err(p) => std::mem::take(&mut *p.into_inner()),
        }
    }
}

impl DiagnosticsSink for CollectingSink {
    fn emit(&self, diag: Diagnostic) {
        match self.seen.lock() {
            Ok(mut g) => g.push(diag),
            Err(p) => p.into_inner().push(diag),
        }
    }
}
