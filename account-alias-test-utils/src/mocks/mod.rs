//! Mock implementations for testing

mod identity;

pub use identity::{MockCall, MockIdentityService};
