//! sensordash - live dashboard for newline-delimited JSON sensor readings.
//!
//! Reads one JSON object per line from stdin (or `--input`) and renders
//! per-device readings plus Indoor/Garden averages in the terminal.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use sensordash::config::{STALE_SECS_ENV, Settings};
use sensordash::queue::line_channel;
use sensordash::source::{InputSpec, LineSource};
use sensordash::tui::App;

/// Live terminal dashboard for temperature/humidity sensors.
#[derive(Parser)]
#[command(
    name = "sensordash",
    about = "Live terminal dashboard for JSON sensor readings",
    version
)]
struct Args {
    /// Freshness window in seconds (1..86399). Invalid values fall back to 900.
    #[arg(long, env = STALE_SECS_ENV, value_name = "SECS")]
    stale_secs: Option<String>,

    /// Read readings from a file instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Disable the humidity alert color.
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs a file-backed tracing subscriber.
/// The terminal belongs to the dashboard, so logs never go to stdout/stderr.
fn init_logging(path: &PathBuf, verbose: u8) -> std::io::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("sensordash={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// True if the terminal can show the alert color.
fn detect_colors(disabled: bool) -> bool {
    !disabled && crossterm::style::available_color_count() >= 8
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path, args.verbose)
    {
        eprintln!("Error: cannot open log file {}: {}", path.display(), e);
        std::process::exit(1);
    }

    let settings = Settings::default()
        .with_stale_secs(args.stale_secs.as_deref())
        .with_colors(detect_colors(args.no_color));

    let input = args.input.map(InputSpec::File).unwrap_or_default();
    let (sender, receiver) = line_channel(settings.queue_capacity);
    let source = match LineSource::open(&input, sender) {
        Ok(source) => source,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(?input, "reading sensor lines");

    let app = App::new(&settings, receiver).with_source(source);
    if let Err(e) = app.run() {
        error!("terminal error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
