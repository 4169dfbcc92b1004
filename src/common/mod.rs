//! Common utilities shared by the CLI and the harness

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::HarnessConfig;
pub use error::{Error, Result};
