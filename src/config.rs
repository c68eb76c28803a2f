use std::str::FromStr;

use tracing::warn;

use crate::audio::config::AudioConfig;

pub const CATALOG_ENV: &str = "PLAYLIST_CATALOG";
pub const VOLUME_ENV: &str = "PLAYLIST_VOLUME";
pub const VOLUME_STEP_ENV: &str = "PLAYLIST_VOLUME_STEP";
pub const SEEK_STEP_ENV: &str = "PLAYLIST_SEEK_STEP";
pub const TICK_ENV: &str = "PLAYLIST_TICK_MS";

pub const DEFAULT_CATALOG: &str = "db.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog path or http(s) URL.
    pub catalog: String,
    pub audio: AudioConfig,
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            audio: AudioConfig::default(),
            tick_rate_ms: 33,
        }
    }
}

impl AppConfig {
    /// Environment first, then the first positional argument as the catalog.
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if let Some(catalog) = std::env::args().nth(1) {
            config.catalog = catalog;
        }
        config
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let audio = AudioConfig {
            volume: parse_or(&lookup, VOLUME_ENV, defaults.audio.volume).min(100),
            volume_step: parse_or(&lookup, VOLUME_STEP_ENV, defaults.audio.volume_step),
            seek_step_secs: parse_or(&lookup, SEEK_STEP_ENV, defaults.audio.seek_step_secs),
            ..defaults.audio
        };

        Self {
            catalog: lookup(CATALOG_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.catalog),
            audio,
            tick_rate_ms: parse_or(&lookup, TICK_ENV, defaults.tick_rate_ms).max(1),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = raw.as_str(), "invalid_config_value");
            default
        }
    }
}
