//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with list output on stdout.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default level for a `-v` count; zero means warnings only.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the filter: SHOPSMART_LOG wins, then `-v`, then the config level.
pub fn build_filter(verbose: u8, config_level: Option<&str>) -> EnvFilter {
    if let Ok(value) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(value.trim()) {
            return filter;
        }
    }
    if verbose > 0 {
        return EnvFilter::new(level_for_verbosity(verbose).as_str());
    }
    config_level
        .and_then(|level| EnvFilter::try_new(level.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(Level::WARN.as_str()))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, config_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }
}
