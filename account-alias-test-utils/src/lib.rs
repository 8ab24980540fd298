//! Test utilities for the account alias reconciler
//!
//! This crate provides an in-memory stand-in for the IAM and STS services so
//! reconciliation can be tested without network access or credentials.

pub mod mocks;

// Re-export commonly used types
pub use mocks::{MockCall, MockIdentityService};
