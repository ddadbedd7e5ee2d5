//! Tabletop robot CLI entry point.
//!
//! Run interactively:
//! ```bash
//! tabletop
//! ```
//! or feed a script of commands, one per line:
//! ```bash
//! tabletop --script moves.txt --echo
//! ```

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tabletop_robot::{
    EditorSource, Interpreter, LineSource, ScriptSource, ShellConfig, ShellError, run,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tabletop", version)]
#[command(about = "Drive a robot around a 5x5 table with text commands")]
struct Args {
    /// Read commands from this file instead of the terminal
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Do not print the help text at startup
    #[arg(long)]
    no_banner: bool,

    /// Echo every command before its response
    #[arg(long)]
    echo: bool,

    /// Prompt shown before each interactive command
    #[arg(long)]
    prompt: Option<String>,

    /// Log every dispatched command to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tabletop_robot=debug,tabletop=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match session(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn session(args: Args) -> Result<(), ShellError> {
    let defaults = ShellConfig::default();
    let config = ShellConfig {
        prompt: args.prompt.unwrap_or(defaults.prompt),
        show_banner: !args.no_banner,
        echo_commands: args.echo,
        ..defaults
    };

    let mut source: Box<dyn LineSource> = match &args.script {
        Some(path) => {
            info!(script = %path.display(), "running script");
            Box::new(ScriptSource::new(BufReader::new(File::open(path)?)))
        }
        None => Box::new(EditorSource::new()?),
    };

    let mut interpreter = Interpreter::new();
    let stdout = io::stdout();
    let summary = run(
        &mut interpreter,
        source.as_mut(),
        &mut stdout.lock(),
        &config,
    )?;
    info!(commands = summary.commands, exited = summary.exited, "session finished");
    Ok(())
}
