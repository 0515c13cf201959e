//! Request interceptor.
//!
//! Renders the policy once at setup and answers:
//! - `GET /.well-known/security.txt` : 200 `text/plain` with the document
//! - `GET /security.txt`             : 301 to the canonical path
//! - anything else                   : pass through

pub mod engine;
pub mod writer;

pub use engine::{Decision, SecurityTxt, CANONICAL_PATH, LEGACY_PATH};
pub use writer::{RequestLine, ResponseWriter};
