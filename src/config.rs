use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_count: usize,
    pub toast_ttl: Duration,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_count: 4,
            toast_ttl: Duration::from_millis(2500),
            tick_rate: Duration::from_millis(200),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let seed_count = parse(&lookup, "TODOER_SEED_COUNT")?.unwrap_or(defaults.seed_count);
        let toast_ttl = parse(&lookup, "TODOER_TOAST_MS")?.map(Duration::from_millis).unwrap_or(defaults.toast_ttl);
        let tick_rate = parse(&lookup, "TODOER_TICK_MS")?.map(Duration::from_millis).unwrap_or(defaults.tick_rate);
        let log_file = lookup("TODOER_LOG_FILE").filter(|p| !p.is_empty()).map(PathBuf::from);
        Ok(Self { seed_count, toast_ttl, tick_rate, log_file })
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
