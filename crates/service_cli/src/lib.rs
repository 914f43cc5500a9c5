//! rootscan CLI library
//!
//! Configuration, output rendering and command implementations for the
//! `rootscan` binary. Exposed as a library so they can be tested directly.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
