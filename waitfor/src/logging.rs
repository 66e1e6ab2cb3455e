//! Logging setup. Level comes from `LOG_LEVEL`; output goes to stderr so the
//! wrapped command owns stdout.

use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: LevelFilter,
    /// The raw value when it could not be parsed.
    pub rejected: Option<String>,
}

pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fatal" | "panic" => Some(LevelFilter::ERROR),
        "disabled" => Some(LevelFilter::OFF),
        other => other.parse().ok(),
    }
}

/// `--quiet` caps the level at `error`.
pub fn resolve_level(raw: Option<&str>, quiet: bool) -> LevelChoice {
    let (level, rejected) = match raw {
        None => (DEFAULT_LEVEL, None),
        Some(v) if v.trim().is_empty() => (DEFAULT_LEVEL, None),
        Some(v) => match parse_level(v) {
            Some(l) => (l, None),
            None => (DEFAULT_LEVEL, Some(v.to_string())),
        },
    };
    let level = if quiet { level.min(LevelFilter::ERROR) } else { level };
    LevelChoice { level, rejected }
}

/// HTTP stack crates never log below `warn`.
pub fn filter_for(level: LevelFilter) -> EnvFilter {
    let deps = level.min(LevelFilter::WARN);
    EnvFilter::new(format!("{level},reqwest={deps},hyper={deps},hyper_util={deps},rustls={deps}"))
}

pub fn init(quiet: bool) -> LevelFilter {
    let raw = std::env::var(LOG_LEVEL_ENV).ok();
    let choice = resolve_level(raw.as_deref(), quiet);
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(choice.level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
    if let Some(bad) = choice.rejected {
        warn!("Invalid log level {:?}, defaulting to '{}'", bad, DEFAULT_LEVEL);
    }
    choice.level
}
