//! Logging initialization for prj.
//!
//! Logs go to stderr only. Stdout belongs to command output, which `goto`
//! expects the shell to `eval`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Guard that must be held for the lifetime of the application.
/// When dropped, flushes any pending log writes.
#[must_use = "Dropping this guard will stop logging - keep it alive for the program's lifetime"]
pub struct LoggingGuard {
    _stderr_guard: WorkerGuard,
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` (the number of `-v` flags)
/// picks the level.
pub fn init_logging(verbosity: u8) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| parse_verbosity(verbosity));

    let (non_blocking_stderr, guard) = tracing_appender::non_blocking(std::io::stderr());

    let stderr_layer = fmt::layer()
        .with_writer(non_blocking_stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize logging subscriber")?;

    Ok(LoggingGuard {
        _stderr_guard: guard,
    })
}

fn parse_verbosity(verbosity: u8) -> EnvFilter {
    let level_str = match verbosity {
        0 => "prj=warn",
        1 => "prj=debug",
        _ => "prj=trace",
    };
    EnvFilter::new(level_str)
}
