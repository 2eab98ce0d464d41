//! Preset template library: layouts that ship with the service.
//!
//! Presets are an alternative to cloning a design from an uploaded image. They
//! use the same token and loop-marker vocabulary as AI-generated templates and
//! go through the same merge engine.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::layout_limits::analyze_layout_limits;
use crate::models::{LayoutLimits, PageSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Simple,
    Professional,
    Creative,
    Modern,
}

/// A complete preset: metadata plus the HTML layout.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub layout_limits: LayoutLimits,
    pub page_size: PageSize,
    pub html_template: &'static str,
}

/// Preset metadata for gallery listings (no HTML body).
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

struct PresetSpec {
    id: &'static str,
    name: &'static str,
    category: TemplateCategory,
    description: &'static str,
    tags: &'static [&'static str],
    html: &'static str,
}

const PRESETS: &[PresetSpec] = &[
    PresetSpec {
        id: "minimal-bw",
        name: "Minimal Black & White",
        category: TemplateCategory::Simple,
        description: "Clean and professional, suited to finance and legal roles",
        tags: &["minimal", "traditional", "formal"],
        html: include_str!("presets/minimal_bw.html"),
    },
    PresetSpec {
        id: "professional-two-col",
        name: "Professional Two Column",
        category: TemplateCategory::Professional,
        description: "Classic two-column layout for IT and consulting professionals",
        tags: &["two-column", "professional", "general"],
        html: include_str!("presets/professional_two_col.html"),
    },
    PresetSpec {
        id: "creative-colorful",
        name: "Creative Colorful",
        category: TemplateCategory::Creative,
        description: "Vibrant, eye-catching design for creative professionals",
        tags: &["creative", "vibrant", "design"],
        html: include_str!("presets/creative_colorful.html"),
    },
    PresetSpec {
        id: "modern-fresh",
        name: "Modern Fresh",
        category: TemplateCategory::Modern,
        description: "Clean, modern design for tech and startup professionals",
        tags: &["modern", "fresh", "tech"],
        html: include_str!("presets/modern_fresh.html"),
    },
];

/// Immutable, ordered collection of preset templates. Built once at startup.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<ResumeTemplate>,
}

impl TemplateLibrary {
    /// Builds the library from the presets compiled into the binary.
    /// Layout limits are derived from each preset's markup.
    pub fn builtin() -> Self {
        let templates = PRESETS
            .iter()
            .map(|preset| {
                let html_template = preset.html.trim();
                let layout_limits = analyze_layout_limits(html_template);
                debug!("Loaded preset '{}' ({} bytes)", preset.id, html_template.len());
                ResumeTemplate {
                    id: preset.id,
                    name: preset.name,
                    category: preset.category,
                    description: preset.description,
                    tags: preset.tags,
                    layout_limits,
                    page_size: PageSize::A4,
                    html_template,
                }
            })
            .collect();

        Self { templates }
    }

    pub fn all(&self) -> &[ResumeTemplate] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&ResumeTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates
            .iter()
            .map(|t| TemplateSummary {
                id: t.id,
                name: t.name,
                category: t.category,
                description: t.description,
                tags: t.tags,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}
