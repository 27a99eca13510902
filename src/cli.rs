//! CLI Module
//!
//! Argument surface and command runner for wavecmp. Parsing stays here so
//! the library modules never see clap types.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::compare::{verdict, Mode, Tolerance};
use crate::error::Result;
use crate::io::load_wav;
use crate::plot::{render_diff_png, PlotStyle};

/// Compare two .wav files sample-for-sample
#[derive(Parser, Debug)]
#[command(name = "wavecmp")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// First audio file
    pub x: PathBuf,

    /// Second audio file
    pub y: PathBuf,

    /// Plot differences instead of printing a verdict
    #[arg(short, long)]
    pub plot: bool,

    /// Relative tolerance
    #[arg(short, long, default_value_t = 0.0)]
    pub rtol: f32,

    /// Absolute tolerance
    #[arg(short, long, default_value_t = 0.1)]
    pub atol: f32,

    /// Output path for the diff figure (plot mode only)
    #[arg(short, long, default_value = "diff.png")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Comparison mode selected by this invocation
    pub fn mode(&self) -> Mode {
        if self.plot {
            Mode::Visualize
        } else {
            Mode::Verdict
        }
    }

    /// Tolerance configuration selected by this invocation
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.rtol, self.atol)
    }
}

/// Load both signals and run the selected mode.
pub fn run(cli: &Cli) -> Result<()> {
    info!(
        "Comparing '{}' and '{}'",
        cli.x.display(),
        cli.y.display()
    );

    let x = load_wav(&cli.x)?;
    let y = load_wav(&cli.y)?;

    match cli.mode() {
        Mode::Verdict => {
            let ok = verdict(&x, &y, cli.tolerance())?;
            println!("{}", if ok { ":-)" } else { ":-(" });
        }
        Mode::Visualize => {
            render_diff_png(&x, &y, &cli.output, PlotStyle::default())?;
        }
    }

    Ok(())
}
