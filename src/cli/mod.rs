//! CLI entry point and argument parsing. Grounded on heliport's `cli/mod.rs`:
//! a `clap::Parser` root with one subcommand per operation, logging
//! initialized once in `cli_run` based on a `--quiet` flag, never inside
//! library code.

mod identify;
mod train;

use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use self::identify::IdentifyCmd;
use self::train::TrainCmd;

#[derive(Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, help = "Do not print log messages")]
    quiet: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    #[command(about = "Identify languages of input text", visible_alias = "detect")]
    Identify(IdentifyCmd),
    #[command(about = "Build n-gram model files from a training corpus")]
    Train(TrainCmd),
}

pub fn cli_run<I, T>(os_args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Cli::parse_from(os_args);

    if !args.quiet {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();
    }

    match args.command {
        Commands::Identify(cmd) => cmd.cli(),
        Commands::Train(cmd) => cmd.cli(),
    }
}
