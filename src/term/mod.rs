use basic::lang::Error;
use basic::mach::{Console, Event, Runtime};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod linefeed;
mod stdio;

#[derive(Parser, Debug)]
#[command(name = "basic")]
#[command(about = "A line-numbered integer BASIC")]
struct Args {
    /// File of commands and numbered lines, entered as if typed
    script: Option<PathBuf>,

    /// Read from stdin without the line editor
    #[arg(long)]
    plain: bool,
}

pub fn main() {
    let args = Args::parse();
    init_logging();
    let result = match &args.script {
        Some(path) => stdio::main_loop(Some(path)),
        None if args.plain => stdio::main_loop(None),
        None => self::linefeed::main_loop(),
    };
    if let Err(err) = result {
        error!(%err, "terminal failure");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with program output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Hand one line to the runtime. Errors are shown and swallowed; only a
/// failing console ends the session.
fn enter(
    runtime: &mut Runtime,
    line: &str,
    console: &mut dyn Console,
    style: fn(&Error) -> String,
) -> std::io::Result<Event> {
    match runtime.enter(line, console) {
        Ok(event) => Ok(event),
        Err(error) => {
            console.print_line(&style(&error))?;
            Ok(Event::Ready)
        }
    }
}
