use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: PathBuf,

    /// Seed for the custom-range trend series. Unset means a fresh random
    /// series on every request.
    pub trend_seed: Option<u64>,

    /// JSON file replacing the built-in employee fixture
    pub employee_seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let trend_seed = match lookup("TREND_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("TREND_SEED must be an unsigned integer, got {raw:?}"))?,
            ),
            None => None,
        };

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            trend_seed,
            employee_seed_file: lookup("EMPLOYEE_SEED_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.trend_seed, None);
        assert!(config.employee_seed_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "0.0.0.0:9000"),
            ("API_PREFIX", "/v1"),
            ("TREND_SEED", " 42 "),
            ("EMPLOYEE_SEED_FILE", "/srv/employees.json"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:9000");
        assert_eq!(config.api_prefix, "/v1");
        assert_eq!(config.trend_seed, Some(42));
        assert_eq!(
            config.employee_seed_file,
            Some(PathBuf::from("/srv/employees.json"))
        );
    }

    #[test]
    fn rejects_bad_seed() {
        let err = Config::from_lookup(lookup_from(&[("TREND_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("TREND_SEED"));
    }
}
