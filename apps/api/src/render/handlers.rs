use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::export::{export, ExportFormat};
use crate::render::{RenderRequest, RenderResponse};
use crate::state::AppState;
use crate::template_engine::render_template;

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let template = req.resolve_template(&state.templates)?;
    let html = render_template(template, req.data.as_ref());
    Ok(Json(RenderResponse { html }))
}

/// POST /api/v1/export/:format
pub async fn handle_export(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let format: ExportFormat = format.parse()?;
    let data = req
        .data
        .as_ref()
        .ok_or_else(|| AppError::Validation("data is required for export".to_string()))?;

    let template = req.resolve_template(&state.templates)?;
    let html = render_template(template, Some(data));
    let file = export(format, &html, data).map_err(|e| AppError::Internal(e.into()))?;

    debug!(
        "Exported {} ({} bytes, {})",
        file.filename,
        file.body.len(),
        file.content_type
    );

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.body,
    )
        .into_response())
}
