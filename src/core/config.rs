//! Environment-driven bot configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add poll sweep interval and default results channel
//! - 1.0.0: Initial token, guild and port settings

use anyhow::{anyhow, Context, Result};
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: Option<u64>,
    /// Guild to register commands in; `None` registers them globally
    pub discord_guild_id: Option<u64>,
    /// Fallback results channel for polls created without `results_channel`
    pub default_results_channel: Option<u64>,
    pub port: u16,
    pub log_level: String,
    pub sweep_interval: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let discord_token =
            get("DISCORD_TOKEN").ok_or_else(|| anyhow!("DISCORD_TOKEN must be set"))?;

        Ok(Self {
            discord_token,
            application_id: parse_optional(&get, "DISCORD_APPLICATION_ID")?,
            discord_guild_id: parse_optional(&get, "DISCORD_GUILD_ID")?,
            default_results_channel: parse_optional(&get, "POLL_RESULTS_CHANNEL_ID")?,
            port: parse_optional(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            sweep_interval: Duration::from_secs(
                parse_optional(&get, "POLL_SWEEP_INTERVAL_SECS")?
                    .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS)
                    .max(1),
            ),
        })
    }
}

fn parse_optional<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    get(key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("{key} is not a valid number: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sweep_interval, Duration::from_secs(600));
        assert!(config.application_id.is_none());
        assert!(config.discord_guild_id.is_none());
        assert!(config.default_results_channel.is_none());
    }

    #[test]
    fn test_missing_token_is_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_APPLICATION_ID", "111"),
            ("DISCORD_GUILD_ID", "222"),
            ("POLL_RESULTS_CHANNEL_ID", "333"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("POLL_SWEEP_INTERVAL_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.application_id, Some(111));
        assert_eq!(config.discord_guild_id, Some(222));
        assert_eq!(config.default_results_channel, Some(333));
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sweep_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "  "),
            ("POLL_RESULTS_CHANNEL_ID", ""),
        ]))
        .unwrap();

        assert!(config.discord_guild_id.is_none());
        assert!(config.default_results_channel.is_none());
    }

    #[test]
    fn test_invalid_number_names_variable() {
        let err = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("POLL_RESULTS_CHANNEL_ID", "#results"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("POLL_RESULTS_CHANNEL_ID"));
    }
}
