//! AWS-oriented adapters and handlers for serving feature toggles.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! parameter store adapter seam, and handler configuration). Event shapes and
//! toggle map primitives live in `toggles_contract`.

pub mod adapters;
pub mod config;
pub mod handlers;
