//! Render API: merges a record into a template (preset or inline) for
//! preview, and wraps the result in a downloadable file for export.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ResumeData;
use crate::templates::TemplateLibrary;

/// Shared body of `/render` and `/export/:format`.
#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    /// Inline HTML template, e.g. the output of the vision stage.
    pub template: Option<String>,
    /// Preset id. Takes precedence over `template` when both are present.
    pub template_id: Option<String>,
    pub data: Option<ResumeData>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

impl RenderRequest {
    /// The template to render. A preset id must exist; an absent template is
    /// not an error (the engine renders its loading placeholder).
    pub fn resolve_template<'a>(
        &'a self,
        library: &'a TemplateLibrary,
    ) -> Result<Option<&'a str>, AppError> {
        match self.template_id.as_deref() {
            Some(id) => library
                .get(id)
                .map(|preset| Some(preset.html_template))
                .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found"))),
            None => Ok(self.template.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_id_wins_over_inline_template() {
        let library = TemplateLibrary::builtin();
        let req = RenderRequest {
            template: Some("<p>inline</p>".to_string()),
            template_id: Some("minimal-bw".to_string()),
            data: None,
        };
        let resolved = req.resolve_template(&library).unwrap().unwrap();
        assert_eq!(resolved, library.get("minimal-bw").unwrap().html_template);
    }

    #[test]
    fn test_inline_template_and_absent_template() {
        let library = TemplateLibrary::builtin();
        let req = RenderRequest {
            template: Some("<p>inline</p>".to_string()),
            ..Default::default()
        };
        assert_eq!(req.resolve_template(&library).unwrap(), Some("<p>inline</p>"));
        assert_eq!(RenderRequest::default().resolve_template(&library).unwrap(), None);
    }

    #[test]
    fn test_unknown_preset_is_not_found() {
        let library = TemplateLibrary::builtin();
        let req = RenderRequest {
            template_id: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            req.resolve_template(&library),
            Err(AppError::NotFound(_))
        ));
    }
}
