use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "NINES_CONFIG";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print the left/right finger explanation under each result.
    pub explain: bool,
    /// Draw both hands after each selection.
    pub hands: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            explain: true,
            hands: true,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Defaults, then the TOML file named by `NINES_CONFIG`, then `NINES_*` variables.
pub fn load() -> Result<Config, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

pub fn load_with<F>(env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.explain {
            cfg.explain = v;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
        }
    }

    if let Some(v) = env("NINES_EXPLAIN").filter(|v| !v.is_empty()) {
        cfg.explain =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid(format!("explain: {}", v)))?;
    }
    if let Some(v) = env("NINES_HANDS").filter(|v| !v.is_empty()) {
        cfg.hands = parse_bool(&v).ok_or_else(|| ConfigError::Invalid(format!("hands: {}", v)))?;
    }
    if let Some(v) = env("NINES_LOG").filter(|v| !v.is_empty()) {
        cfg.log_level = v;
    }

    cfg.log_level = cfg.log_level.to_ascii_lowercase();
    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    explain: Option<bool>,
    #[serde(default)]
    hands: Option<bool>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "log_level must be one of {}, got {}",
            LOG_LEVELS.join("|"),
            cfg.log_level
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
