mod config;
mod connector;
mod error;
mod stage;
mod transport;

pub use cloud::{Point, PointCloud};
pub use image_source::{ImageStore, LocalFs, PathResolver, SearchDirs};

pub use crate::config::{ConnectorConfig, DEFAULT_ENDPOINT, DEFAULT_IMAGE_FILE_NAME, DEFAULT_TIMEOUT_SECS};
pub use crate::connector::{DataConnector, DataReceiver};
pub use crate::error::{FetchError, Result, TransportError};
pub use crate::stage::FetchStage;
pub use crate::transport::{HttpTransport, Transport, Upload, UPLOAD_FIELD};
