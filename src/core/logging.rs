//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the `-v` count:
//! none for `info`, one for `debug`, two or more for `trace`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
