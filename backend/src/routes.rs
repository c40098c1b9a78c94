mod pointcloud;

use std::sync::Arc;
use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pointcloud::health))
        .route("/pointcloud", post(pointcloud::pointcloud))
        // Older clients still post here.
        .route("/pointcloud2", post(pointcloud::pointcloud))
}
