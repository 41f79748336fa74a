//! App Configuration
//!
//! Compile-time defaults shared by the tabs.

use log::LevelFilter;

/// Storage keys
pub const STATS_KEY: &str = "petStats";
pub const THEME_KEY: &str = "theme";
pub const POSITION_KEY: &str = "petPosition";

/// Application-wide settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Preferred camera facing mode when no device is selected
    pub facing_mode: &'static str,
    pub ideal_width: u32,
    pub ideal_height: u32,
    /// Delay between live decode attempts
    pub decode_interval_ms: u32,
    /// How long a pet reaction (happy / excited) stays on screen
    pub reaction_ms: u32,
    /// Rounds per boss patrol
    pub patrol_rounds: usize,
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            facing_mode: "environment",
            ideal_width: 1280,
            ideal_height: 720,
            decode_interval_ms: 250,
            reaction_ms: 3000,
            patrol_rounds: 2,
            log_level: LevelFilter::Info,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Apply `log=<level>` from a URL query string (`?log=debug`)
    pub fn with_query(mut self, query: &str) -> Self {
        let level = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == "log")
            .and_then(|(_, v)| v.parse::<LevelFilter>().ok());
        if let Some(level) = level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_overrides_log_level() {
        let config = AppConfig::default().with_query("?tab=pet&log=debug");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_query_without_level_keeps_default() {
        let config = AppConfig::default().with_query("?log=loud");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(AppConfig::default().with_query("").log_level, LevelFilter::Info);
    }
}
