//! SST regression harness
//!
//! Runs the SST simulator on every `sdl*.xml` input of a directory and
//! compares the statistics it writes against golden references.

pub mod cli;
pub mod commands;
pub mod common;
pub mod harness;

pub use common::{Error, HarnessConfig, Result};
pub use harness::{CaseOutcome, Harness, Summary, Verdict};
