use std::path::Path;
use std::time::Duration;
use config::{Config, ConfigError, Environment, File};
use image_source::SearchDirs;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/pointcloud";
pub const DEFAULT_IMAGE_FILE_NAME: &str = "sample.png";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_PREFIX: &str = "CONNECTOR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// URL the image is posted to.
    pub endpoint: String,

    /// Image to send when no explicit hint is given.
    pub image_file_name: String,

    /// Request timeout, in seconds.
    pub timeout_secs: u64,

    /// Extra directories searched for the image.
    pub search: SearchDirs,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            image_file_name: DEFAULT_IMAGE_FILE_NAME.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            search: SearchDirs::default(),
        }
    }
}

impl ConnectorConfig {
    /// Defaults, overlaid by the optional file, overlaid by `CONNECTOR_*`
    /// environment variables (`CONNECTOR_SEARCH__ASSETS` for nested keys).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize::<ConnectorConfig>());

        if let Err(e) = &settings {
            error!("Failed to load configuration: {}", e);
        }
        settings
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
