//! jattr CLI - print selected top-level attributes of a judgement JSON file
//!
//! Modes, checked in this order:
//! - `--a`: every attribute
//! - `--s <name>`: one attribute
//! - `--m <a,b,...>`: several attributes, in the order given
//! - no flag: every attribute except JFULL and JPDF

use clap::Parser;
use jattr_core::{
    extract, write_rendered, ExtractError, ExtractOptions, RenderOptions, Selection,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "jattr")]
#[command(about = "Extract attributes from judgement JSON files")]
#[command(version)]
#[command(args_override_self = true)]
struct Cli {
    /// Path to the judgement JSON file
    filepath: PathBuf,
    /// Return all attributes including 'JFULL' and 'JPDF'
    #[arg(long = "a")]
    all: bool,
    /// Return a specific attribute by name
    #[arg(long = "s", value_name = "ATTRIBUTE")]
    single: Option<String>,
    /// Return multiple specific attributes, separated by commas
    #[arg(long = "m", value_name = "ATTRIBUTES")]
    multiple: Option<String>,
    /// Log processing details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ExtractError> {
    let selection = Selection::from_flags(
        cli.all,
        cli.single.as_deref(),
        cli.multiple.as_deref(),
    );
    debug!(path = %cli.filepath.display(), mode = selection.mode_name(), "extracting");

    let selected = extract(&cli.filepath, &selection, &ExtractOptions::default())?;

    let stdout = std::io::stdout();
    write_rendered(stdout.lock(), &selected, &RenderOptions::default())
}

/// Load failures go to stdout as a single plain line; anything else is an
/// output failure and goes to stderr.
fn report_error(err: &ExtractError) {
    debug!(error = ?err, "extraction failed");
    if err.path().is_some() {
        let mut stdout = std::io::stdout().lock();
        // best-effort: exiting with 1 either way
        let _ = writeln!(stdout, "{}", err);
        let _ = stdout.flush();
    } else {
        eprintln!("Error: {}", err);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
