//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when `ROSTER_LOG` names a
//! file. Headless mode falls back to stderr, errors only.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILE: &str = "ROSTER_LOG";
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";

/// Default filter when logging to a file.
const FILE_LEVEL: &str = "info";

/// Default filter on stderr. Rejected requests are already reported on
/// stdout, so their `warn` events stay out of the headless transcript.
const STDERR_LEVEL: &str = "error";

/// Install the global subscriber for this run
pub fn init(headless: bool) -> io::Result<()> {
    let path = std::env::var(ENV_LOG_FILE).ok().filter(|p| !p.is_empty());
    let level = std::env::var(ENV_LOG_LEVEL).ok();

    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            // A second init (tests, re-entry) keeps the first subscriber
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(level.as_deref(), FILE_LEVEL))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if headless => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(level.as_deref(), STDERR_LEVEL))
                .with_writer(io::stderr)
                .try_init();
        }
        None => {}
    }

    Ok(())
}

fn filter(level: Option<&str>, default: &str) -> EnvFilter {
    level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}
