use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "LOGCONF_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Level requested on the command line (`-v` count)
fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LEVEL,
        1 => "debug",
        _ => "trace",
    }
}

/// `-v` wins over `LOGCONF_LOG`, which wins over the default
fn build_filter(verbosity: u8) -> EnvFilter {
    if verbosity > 0 {
        return EnvFilter::new(verbosity_level(verbosity));
    }

    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber, writing to stderr
///
/// Call once at startup; stdout stays reserved for command output.
pub fn initialize_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
