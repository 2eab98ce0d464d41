//! AI extraction: the two model-backed stages that feed the merge engine.
//!
//! - **Vision architect** (`vision`): resume screenshot → HTML layout template
//!   written in the token / loop-marker vocabulary.
//! - **Content strategist** (`strategist`): resume text + job description →
//!   structured `ResumeData`, cut to the template's layout budget.
//!
//! Both stages take a `&dyn ChatBackend` so callers decide which model client
//! (or test stub) does the work.

pub mod handlers;
pub mod layout_limits;
pub mod prompts;
pub mod strategist;
pub mod validation;
pub mod vision;

use serde::Serialize;
use thiserror::Error;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::{LayoutLimits, PageSize};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("generated template is incomplete ({length} characters)")]
    IncompleteTemplate { length: usize },

    #[error("model reply contained no JSON object")]
    MissingJson,

    #[error("model reply is not a valid resume record: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Llm(e) => AppError::Llm(e.to_string()),
            other => AppError::UnprocessableEntity(other.to_string()),
        }
    }
}

/// Output of the vision stage.
#[derive(Debug, Clone, Serialize)]
pub struct VisionResult {
    pub html_template: String,
    pub layout_limits: LayoutLimits,
    pub page_size: PageSize,
}
