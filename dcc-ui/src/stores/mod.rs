//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod admin;
pub mod session;

pub use admin::*;
pub use session::*;
