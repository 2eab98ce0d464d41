use axum::{
    extract::{Multipart, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::strategist::extract_data_from_text;
use crate::extraction::vision::generate_template_from_image;
use crate::extraction::VisionResult;
use crate::models::{LayoutLimits, PageSize, ResumeData};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Budgets of the chosen template. Defaults apply when omitted.
    pub layout_limits: Option<LayoutLimits>,
}

/// POST /api/v1/templates/vision
/// Multipart form with an image field named `file` and an optional
/// `page_size` text field (`a4` or `letter`, default A4).
pub async fn handle_vision(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VisionResult>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut page_size = PageSize::A4;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                if !mime_type.starts_with("image/") {
                    return Err(AppError::Validation(format!(
                        "Field 'file' must be an image, got '{mime_type}'"
                    )));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((mime_type, data));
            }
            Some("page_size") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read page_size: {e}")))?;
                page_size = PageSize::from_name(&value).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Unsupported page_size '{value}' (expected a4 or letter)"
                    ))
                })?;
            }
            _ => {}
        }
    }

    let (mime_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing image field 'file'".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded image is empty".to_string()));
    }

    let image_b64 = BASE64.encode(&data);
    let result = generate_template_from_image(
        state.llm.as_ref(),
        &state.config.vision_model,
        &image_b64,
        &mime_type,
        page_size,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/resumes/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ResumeData>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }
    if req.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text must not be empty".to_string()));
    }

    let limits = req.layout_limits.unwrap_or_default();
    let data = extract_data_from_text(
        state.llm.as_ref(),
        &state.config.text_model,
        &req.resume_text,
        &req.jd_text,
        &limits,
    )
    .await?;

    Ok(Json(data))
}
