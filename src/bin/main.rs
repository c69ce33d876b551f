use std::path::Path;

use buildtargets::{cli::input::CliArgs, utils::logger::config_logger, worker::run_buildtargets};
use clap::Parser;
use color_eyre::Result;
use env_logger::Target;

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::debug!("Launching a new buildtargets program");

    let stdout = std::io::stdout();
    run_buildtargets(&cli_args, Path::new("."), &mut stdout.lock())?;
    log::debug!("Tasks successfully finished");

    Ok(())
}
