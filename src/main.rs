//! hexplain: annotated hex dumps from templates.
//!
//! Reads a template on stdin and writes the result on stdout.

use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;
use tracing::Level;

/// Environment variable to set the log level.
const ENV_VAR_LOG: &str = "HEXPLAIN_LOG";

/// Log level when `HEXPLAIN_LOG` is not set.
const DEFAULT_LOG_LEVEL: Level = Level::WARN;

#[derive(Parser)]
#[command(
    name = "hexplain",
    version,
    about = "Render a template of %-directives with data from binary files",
    after_help = "The template is read from stdin. Use --directives to list the directives."
)]
struct Cli {
    /// Print the reference of the directives and exit
    #[arg(long)]
    directives: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    let result = if cli.directives {
        io::stdout().write_all(hexplain::HELP).map_err(hexplain::Error::from)
    } else {
        run()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hexplain: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> hexplain::Result<()> {
    let mut template = String::new();
    io::stdin().read_to_string(&mut template)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut output = BufWriter::new(stdout.lock());

    hexplain::interpret(&template, &mut output, stderr.lock())?;

    output.flush()?;
    Ok(())
}

fn init_logging() {
    let level = std::env::var(ENV_VAR_LOG)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
