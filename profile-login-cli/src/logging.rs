//! Logging setup
//!
//! Logs go to stderr, apart from the screens on stdout. The default level
//! is `warn`, and the login flow logs nothing above `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins; otherwise `verbose` picks the level (0 = warn,
/// 1 = info, 2+ = debug).
pub fn init_logging(verbose: u8, ansi: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(ansi),
        )
        .init();
}
