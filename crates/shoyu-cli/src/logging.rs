//! Log setup.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps a `log.level` value to a tracing level.
///
/// Single-letter aliases are accepted. `fatal` and `panic` map to `error`;
/// anything unrecognized falls back to `info`.
pub fn parse_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "t" | "trace" => Level::TRACE,
        "d" | "debug" => Level::DEBUG,
        "w" | "warn" => Level::WARN,
        "e" | "error" | "f" | "fatal" | "p" | "panic" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: &str) {
    let fallback = LevelFilter::from_level(parse_level(level));

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback.into())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
