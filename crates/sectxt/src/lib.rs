//! Top-level facade crate for sectxt.
//!
//! Re-exports the policy core and the gateway library so users can depend on a single crate.

pub mod core {
    pub use sectxt_core::*;
}

pub mod gateway {
    pub use sectxt_gateway::*;
}
