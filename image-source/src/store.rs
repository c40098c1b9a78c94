use std::io;
use std::path::Path;
use async_trait::async_trait;

/// Where image bytes come from once a path has been resolved.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Read the whole file. The handle is closed before this returns.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

#[async_trait]
impl ImageStore for LocalFs {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// Final path component, used as the upload file name.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
