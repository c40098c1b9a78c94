use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use crate::sampler::SamplerConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Port to listen on, on all interfaces.
    pub port: u16,

    /// Origins allowed by CORS. Empty allows none.
    pub allowed_origins: Vec<String>,

    /// Largest accepted request body, in bytes.
    pub body_limit: usize,

    pub sampler: SamplerConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            allowed_origins: Vec::new(),
            body_limit: 16 * 1024 * 1024,
            sampler: SamplerConfig::default(),
        }
    }
}

impl BackendConfig {
    /// Defaults overlaid by `BACKEND_*` environment variables.
    /// `BACKEND_ALLOWED_ORIGINS` is a comma separated list.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(environment())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BACKEND")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("allowed_origins")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use config::Map;
    use super::*;

    fn load(vars: &[(&str, &str)]) -> BackendConfig {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        BackendConfig::from_environment(environment().source(Some(vars))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.port, 8000);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.body_limit, 16 * 1024 * 1024);
        assert_eq!(config.sampler, SamplerConfig::default());
    }

    #[test]
    fn test_origin_list() {
        let config = load(&[(
            "BACKEND_ALLOWED_ORIGINS",
            "http://localhost:3000,https://viewer.example.com",
        )]);
        assert_eq!(
            config.allowed_origins,
            ["http://localhost:3000", "https://viewer.example.com"]
        );
    }

    #[test]
    fn test_single_origin_is_a_list() {
        let config = load(&[("BACKEND_ALLOWED_ORIGINS", "http://localhost:3000")]);
        assert_eq!(config.allowed_origins, ["http://localhost:3000"]);
    }

    #[test]
    fn test_scalars_and_nested_sampler() {
        let config = load(&[
            ("BACKEND_PORT", "9100"),
            ("BACKEND_BODY_LIMIT", "1024"),
            ("BACKEND_SAMPLER__STRIDE", "2"),
            ("BACKEND_SAMPLER__MAX_POINTS", "10"),
            ("OTHER_PORT", "1"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.body_limit, 1024);
        assert_eq!(config.sampler.stride, 2);
        assert_eq!(config.sampler.max_points, 10);
        assert_eq!(config.sampler.edge_threshold, SamplerConfig::default().edge_threshold);
    }
}
