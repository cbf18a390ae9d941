use tracing_subscriber::EnvFilter;

use crate::config::AnalysisConfig;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "tempest",
    "tempest_align",
    "tempest_calendar",
    "tempest_geo",
    "tempest_quantile",
    "tempest_tracks",
];

/// Maps a verbosity level to a log level name.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn level_name(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Default filter directive covering every workspace crate.
pub fn default_filter(verbosity: u8) -> String {
    let level = level_name(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing for the given verbosity level.
///
/// `RUST_LOG` env var overrides the verbosity if set. Returns an error if
/// a global subscriber is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Initialize tracing at the verbosity of the `[logging]` config section.
///
/// Same as [`init`], `RUST_LOG` still takes precedence.
pub fn init_from_config(config: &AnalysisConfig) -> anyhow::Result<()> {
    init(config.logging.verbosity)
}
