//! Shared feature toggle primitives.
//!
//! This crate owns the HTTP-style event contracts exchanged with the invocation
//! runtime and the toggle map produced from the parameter hierarchy. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod events;
pub mod toggles;
