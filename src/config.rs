use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default location of the configuration file, relative to the working
/// directory the binary is launched from.
pub const CONFIG_PATH: &str = "config/clicalc.toml";

/// Application configuration, loaded from [`CONFIG_PATH`] when the file
/// exists. Every field falls back to a default so the binary runs without
/// any configuration on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub tick_rate_ms: u64,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LogSettings {
    /// One of off, error, warn, info, debug, trace.
    pub level: String,
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log: LogSettings::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            file: PathBuf::from("clicalc.log"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let parsed = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("config/no-such-file.toml")).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, PathBuf::from("clicalc.log"));
    }

    #[test]
    fn full_file_parses() {
        let config: Config = toml::from_str(
            r#"
            tick-rate-ms = 100

            [log]
            level = "debug"
            file = "out/calc.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, PathBuf::from("out/calc.log"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("[log]\nlevel = \"trace\"\n").unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log.file, PathBuf::from("clicalc.log"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(toml::from_str::<Config>("tick-rate-ms = \"fast\"").is_err());
    }
}
