//! Log subscriber setup for the binary.
//!
//! Everything goes to stderr so that `timings -o -` can stream the table on
//! stdout. `RUST_LOG` always wins over the `-v` count.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Debug log destination used by `--debug`.
pub const DEBUG_LOG: &str = "/tmp/repbench-debug.log";

/// Filter directive for a given `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Call once, before any work.
pub fn init(verbose: u8, debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(env_filter("debug"))
            .try_init()
            .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
        tracing::info!("repbench debug log started, tail -f {DEBUG_LOG}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(level_for(verbose)))
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}
