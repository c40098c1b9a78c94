use std::sync::Arc;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::info;
use crate::error::{BackendError, Result};
use crate::sampler::sample_bytes;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

pub async fn health() -> &'static str {
    "success"
}

/// Sample the uploaded image and answer with packed `(x, y, r, g, b)` floats.
pub async fn pointcloud(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let field = multipart
        .next_field()
        .await?
        .ok_or_else(|| BackendError::BadUpload("Missing file".into()))?;

    if field.name() != Some(UPLOAD_FIELD) {
        return Err(BackendError::BadUpload(format!("Expected field '{UPLOAD_FIELD}'")));
    }

    let file_name = field.file_name().unwrap_or("upload").to_owned();
    let bytes = field.bytes().await?;
    info!("Received {} ({} bytes)", file_name, bytes.len());

    let sampler = state.sampler.clone();
    let points = tokio::task::spawn_blocking(move || sample_bytes(&bytes, &sampler))
        .await?;
    info!("Sampled {} points from {}", points.len(), file_name);

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        cloud::encode(&points),
    ))
}
