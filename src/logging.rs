use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `JVDT_LOG=jvdt_explorer=trace`.
pub const LOG_ENV: &str = "JVDT_LOG";

/// Install the global subscriber.
///
/// `JVDT_LOG` wins when set; otherwise `--verbose` selects `debug`, and the
/// default is `warn`. Output is routed through [`crate::stderr_buffer`] so the
/// explorer can hold messages while it owns the terminal.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(crate::stderr_buffer::writer)
        .try_init();
}
