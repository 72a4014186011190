use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::generator::GeneratorStrategy;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.example.com/v1";
pub const DEFAULT_ANALYZE_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_RESULTS_DELAY: Duration = Duration::from_millis(2000);

/// Simulated processing delays for the two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTimings {
    /// How long the capture screen stays in `Analyzing`
    pub analyze_delay: Duration,
    /// How long the results screen stays in `Loading`
    pub results_delay: Duration,
}

impl Default for PipelineTimings {
    fn default() -> Self {
        Self {
            analyze_delay: DEFAULT_ANALYZE_DELAY,
            results_delay: DEFAULT_RESULTS_DELAY,
        }
    }
}

/// Connection settings for the HTTP listing generator.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub strategy: GeneratorStrategy,
    pub generator: GeneratorConfig,
    pub timings: PipelineTimings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match lookup("LISTING_GENERATOR") {
            Some(value) => value
                .parse::<GeneratorStrategy>()
                .context("LISTING_GENERATOR must be 'mock' or 'api'")?,
            None => GeneratorStrategy::Mock,
        };

        let generator = GeneratorConfig {
            api_key: lookup("LISTING_API_KEY").filter(|k| !k.is_empty()),
            endpoint: lookup("LISTING_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
        };

        if strategy == GeneratorStrategy::Api && generator.api_key.is_none() {
            anyhow::bail!("LISTING_API_KEY must be set when LISTING_GENERATOR=api");
        }

        let timings = PipelineTimings {
            analyze_delay: millis(&lookup, "ANALYZE_DELAY_MS", DEFAULT_ANALYZE_DELAY)?,
            results_delay: millis(&lookup, "RESULTS_DELAY_MS", DEFAULT_RESULTS_DELAY)?,
        };

        Ok(Self {
            strategy,
            generator,
            timings,
        })
    }
}

fn millis<F>(lookup: &F, name: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .with_context(|| format!("{} must be a number of milliseconds", name)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_mock_with_standard_delays() {
        let config = load(&[]).unwrap();
        assert_eq!(config.strategy, GeneratorStrategy::Mock);
        assert_eq!(config.timings, PipelineTimings::default());
        assert_eq!(config.generator.endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.generator.api_key, None);
    }

    #[test]
    fn api_strategy_needs_a_key() {
        assert!(load(&[("LISTING_GENERATOR", "api")]).is_err());

        let config = load(&[
            ("LISTING_GENERATOR", "api"),
            ("LISTING_API_KEY", "sk-test"),
            ("LISTING_API_ENDPOINT", "http://localhost:9000"),
        ])
        .unwrap();
        assert_eq!(config.strategy, GeneratorStrategy::Api);
        assert_eq!(config.generator.endpoint, "http://localhost:9000");
    }

    #[test]
    fn delays_are_overridable() {
        let config = load(&[("ANALYZE_DELAY_MS", "10"), ("RESULTS_DELAY_MS", " 20 ")]).unwrap();
        assert_eq!(config.timings.analyze_delay, Duration::from_millis(10));
        assert_eq!(config.timings.results_delay, Duration::from_millis(20));

        assert!(load(&[("ANALYZE_DELAY_MS", "soon")]).is_err());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = GeneratorConfig {
            api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }
}
