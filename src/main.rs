//! wavecmp CLI - Compare two .wav files
//!
//! Command-line entry point: parse arguments, run the comparison, map
//! errors to a non-zero exit status. Structural mismatches between the two
//! inputs exit 2; decode and rendering failures exit 1.

use clap::Parser;
use env_logger::Env;

use wavecmp::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("wavecmp: {}", e);
        std::process::exit(if e.is_structural() { 2 } else { 1 });
    }
}
