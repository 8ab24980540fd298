//! Command line front end for the account alias reconciler

pub mod config;
pub mod error;
pub mod invocation;
pub mod orchestrators;
pub mod output;
