use std::time::Duration;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};
use crate::error::TransportError;

/// Name of the multipart field the image is sent in.
pub const UPLOAD_FIELD: &str = "file";

/// One image, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Sends an upload to the processing endpoint and hands back the raw body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn upload(&self, upload: Upload) -> Result<Vec<u8>, TransportError>;
}

/// Multipart POST over HTTP with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn upload(&self, upload: Upload) -> Result<Vec<u8>, TransportError> {
        let size = upload.bytes.len();
        let part = Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = Form::new().part(UPLOAD_FIELD, part);

        info!("Uploading {} bytes to {}", size, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err)
    }
}
