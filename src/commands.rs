//! CLI command definitions
//!
//! Defines the clap arguments and commands for the harness CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct HarnessArgs {
    /// Directory holding the sdl*.xml inputs and the references/ tree
    #[arg(long, short = 'C', default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Configuration file (default: the user config file, if any)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Kill a simulator run after this many seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run every test and report success/failed per input (default)
    Run,

    /// List the tests and their golden directories without running them
    List,
}
