//! sst-regress - SST simulator regression harness
//!
//! Runs `sst` on every `sdl*.xml` in a directory and reports, per input,
//! whether the produced statistics match the golden references.

use clap::Parser;
use sst_regress::cli;
use sst_regress::commands::{Commands, HarnessArgs};
use sst_regress::common::logging;

#[derive(Parser)]
#[command(name = "sst-regress", about = "SST simulator regression harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: HarnessArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.args.verbose);

    let command = cli.command.unwrap_or(Commands::Run);
    if let Err(e) = cli::dispatch(command, cli.args).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
