pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::templates::handlers as templates;

/// Resume screenshots can exceed axum's 2 MB default.
const MAX_IMAGE_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Preset library
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // AI stages
        .route(
            "/api/v1/templates/vision",
            post(extraction::handle_vision).layer(DefaultBodyLimit::max(MAX_IMAGE_UPLOAD_BYTES)),
        )
        .route("/api/v1/resumes/extract", post(extraction::handle_extract))
        // Merge + export
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/export/:format", post(render::handle_export))
        .with_state(state)
}
