//! lexi CLI entry point.
//!
//! Provides command-line tools for working with lexi dictionary files:
//! - `lexi eval` - Interpolate a template or resolve a key
//! - `lexi check` - Compare locales against a reference locale
//! - `lexi coverage` - Report per-locale translation coverage

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_eval, CheckArgs, CoverageArgs, EvalArgs};
use tracing_subscriber::EnvFilter;

/// Interpolate ICU-subset templates and audit JSON translation dictionaries.
///
/// Dictionaries are JSON objects of locale -> key -> template. Commands that
/// take several files treat them as a resolution chain, first file first.
#[derive(Debug, Parser)]
#[command(name = "lexi")]
#[command(
    about = "Interpolate ICU-subset templates and audit JSON translation dictionaries",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Colorize findings and warnings
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log missing values, keys and options as tracing events on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When warnings and check results are colored.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    /// Color when the stream is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Force owo-colors on or off; `Auto` leaves its stream detection alone.
    fn apply(self) {
        match self {
            ColorWhen::Auto => {}
            ColorWhen::Always => owo_colors::set_override(true),
            ColorWhen::Never => owo_colors::set_override(false),
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare every locale of each file against a reference locale
    Check(CheckArgs),
    /// Show how many reference keys each locale translates
    Coverage(CoverageArgs),
    /// Interpolate a template, or resolve a key through dictionary files
    Eval(EvalArgs),
}

/// Route library diagnostics to stderr. `RUST_LOG` takes precedence over
/// `--verbose`.
fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "lexi=debug" } else { "off" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
