use async_trait::async_trait;
use cloud::PointCloud;
use image_source::{file_name_of, ImageStore, LocalFs, PathResolver, ResolveError};
use tracing::{debug, info, instrument, warn};
use crate::config::ConnectorConfig;
use crate::error::{FetchError, Result, TransportError};
use crate::stage::FetchStage;
use crate::transport::{HttpTransport, Transport, Upload};

/// Anything that can hand out a point cloud on request.
#[async_trait]
pub trait DataReceiver: Send + Sync {
    async fn get_data(&self) -> PointCloud;
}

/// Resolves an image, uploads it and decodes the answer into a point cloud.
///
/// Every failure ends in [`PointCloud::empty`]. The connector holds no
/// mutable state, so concurrent fetches don't interact.
pub struct DataConnector<T, S> {
    image_file_name: String,
    resolver: PathResolver,
    store: S,
    transport: T,
}

impl DataConnector<HttpTransport, LocalFs> {
    pub fn from_config(config: &ConnectorConfig) -> std::result::Result<Self, TransportError> {
        let transport = HttpTransport::new(config.endpoint.clone(), config.timeout())?;
        Ok(Self::new(
            config.image_file_name.clone(),
            PathResolver::standard(&config.search),
            LocalFs,
            transport,
        ))
    }
}

impl<T: Transport, S: ImageStore> DataConnector<T, S> {
    pub fn new(image_file_name: impl Into<String>, resolver: PathResolver, store: S, transport: T) -> Self {
        Self {
            image_file_name: image_file_name.into(),
            resolver,
            store,
            transport,
        }
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }

    /// Fetch the configured image and pass the result to `callback`.
    pub async fn get_data_with<F>(&self, callback: F)
    where
        F: FnOnce(PointCloud) + Send,
    {
        self.fetch_with(&self.image_file_name, callback).await
    }

    /// Fetch and pass the result to `callback`, which runs exactly once.
    pub async fn fetch_with<F>(&self, hint: &str, callback: F)
    where
        F: FnOnce(PointCloud) + Send,
    {
        let cloud = self.fetch(hint).await;
        callback(cloud);
    }

    /// Fetch, logging and absorbing any failure as the empty cloud.
    pub async fn fetch(&self, hint: &str) -> PointCloud {
        match self.try_fetch(hint).await {
            Ok(cloud) => cloud,
            Err(FetchError::PathNotFound(ResolveError::EmptyHint)) => {
                trace_stage(FetchStage::Failed);
                debug!("No image file name given, returning empty cloud");
                PointCloud::empty()
            }
            Err(e) => {
                trace_stage(FetchStage::Failed);
                warn!("Fetch failed during {}: {}", e.stage(), e);
                PointCloud::empty()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn try_fetch(&self, hint: &str) -> Result<PointCloud> {
        trace_stage(FetchStage::default());
        trace_stage(FetchStage::PathResolving);
        let path = self.resolver.resolve(hint)?;

        trace_stage(FetchStage::Reading);
        let bytes = self
            .store
            .read(&path)
            .await
            .map_err(|source| FetchError::Read { path: path.clone(), source })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        trace_stage(FetchStage::Uploading);
        let body = self
            .transport
            .upload(Upload::new(file_name_of(&path), bytes))
            .await?;
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        trace_stage(FetchStage::Decoding);
        let cloud = cloud::decode(&body)?;

        trace_stage(FetchStage::Done);
        info!("Decoded {} points", cloud.len());
        Ok(cloud)
    }
}

#[async_trait]
impl<T: Transport, S: ImageStore> DataReceiver for DataConnector<T, S> {
    async fn get_data(&self) -> PointCloud {
        self.fetch(&self.image_file_name).await
    }
}

fn trace_stage(stage: FetchStage) {
    debug!("Fetch stage: {}", stage);
}
