use serde::Deserialize;
use shared::{DEFAULT_API_PORT, DEFAULT_FLIP_COUNT, DEFAULT_METRICS_PORT, MAX_FLIP_COUNT};
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_port: u16,
    pub metrics_port: u16,
    pub flips: FlipConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlipConfig {
    /// Count used when a request's `count` is missing or unusable
    pub default_count: u64,
    /// Requests above this are treated as unusable and get the default
    pub max_count: u64,
    /// Seeds one shared generator for reproducible responses
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            metrics_port: DEFAULT_METRICS_PORT,
            flips: FlipConfig {
                default_count: DEFAULT_FLIP_COUNT,
                max_count: MAX_FLIP_COUNT,
                seed: None,
            },
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            api_port: lookup("API_PORT")
                .unwrap_or_else(|| DEFAULT_API_PORT.to_string())
                .parse()?,
            metrics_port: lookup("METRICS_PORT")
                .unwrap_or_else(|| DEFAULT_METRICS_PORT.to_string())
                .parse()?,
            flips: FlipConfig {
                default_count: lookup("DEFAULT_FLIP_COUNT")
                    .unwrap_or_else(|| DEFAULT_FLIP_COUNT.to_string())
                    .parse()?,
                max_count: lookup("MAX_FLIP_COUNT")
                    .unwrap_or_else(|| MAX_FLIP_COUNT.to_string())
                    .parse()?,
                seed: lookup("FLIP_SEED")
                    .map(|seed| seed.parse::<u64>())
                    .transpose()?,
            },
        };

        anyhow::ensure!(
            config.flips.default_count >= 1,
            "DEFAULT_FLIP_COUNT must be at least 1"
        );
        anyhow::ensure!(
            config.flips.default_count <= config.flips.max_count,
            "DEFAULT_FLIP_COUNT ({}) exceeds MAX_FLIP_COUNT ({})",
            config.flips.default_count,
            config.flips.max_count
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.metrics_port, 9090);
        assert_eq!(config.flips.default_count, 100);
        assert_eq!(config.flips.max_count, 1_000_000);
        assert_eq!(config.flips.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_PORT", "3000"),
            ("DEFAULT_FLIP_COUNT", "20"),
            ("MAX_FLIP_COUNT", "500"),
            ("FLIP_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.api_port, 3000);
        assert_eq!(config.flips.default_count, 20);
        assert_eq!(config.flips.max_count, 500);
        assert_eq!(config.flips.seed, Some(42));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("API_PORT", "not-a-port")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("FLIP_SEED", "-1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DEFAULT_FLIP_COUNT", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[
            ("DEFAULT_FLIP_COUNT", "50"),
            ("MAX_FLIP_COUNT", "10"),
        ]))
        .is_err());
    }
}
