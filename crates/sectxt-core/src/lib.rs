//! sectxt core: `security.txt` policy model, validation and rendering.
//!
//! This crate turns a loosely-typed policy configuration into the exact
//! line-oriented `security.txt` text. It carries no transport or runtime
//! dependencies so the gateway, tests and other hosts can all reuse it.
//!
//! Pipeline:
//! ```text
//! PolicyConfig (loose tree)
//!     → validate::check   (typed Policy, first violation fails)
//!     → normalize          ((comment, scalar) occurrences)
//!     → render             (wire text, deprecation advisories to a sink)
//! ```
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `SecTxtError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod date;
pub mod diag;
pub mod directive;
pub mod error;
pub mod field;
pub mod normalize;
pub mod render;
pub mod validate;
pub mod value;

/// Shared result type.
pub use error::{ErrorCode, Result, SecTxtError};

pub use diag::{CollectingSink, Diagnostic, DiagnosticsSink, TracingSink};
pub use directive::Profile;
pub use render::{render, render_with, RenderOptions};
pub use validate::{validate, validate_with};
pub use value::{ConfigValue, PolicyConfig};
