//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the given writer; logging goes to stderr.

pub mod check;
pub mod inequality;
pub mod solve;
