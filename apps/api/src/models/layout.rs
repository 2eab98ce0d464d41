use serde::{Deserialize, Serialize};

/// Per-field character and count budgets for a layout template.
///
/// Derived from the template's structure (see `extraction::layout_limits`) and
/// used to truncate extracted content so it fits the design without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutLimits {
    pub full_name: usize,
    pub title: usize,
    pub summary: usize,
    pub exp_company: usize,
    pub exp_role: usize,
    /// Max characters per description line.
    pub exp_description: usize,
    pub exp_count: usize,
    pub skill_name: usize,
    pub skill_count: usize,
    pub edu_school: usize,
    pub edu_degree: usize,
    pub edu_count: usize,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            full_name: 15,
            title: 25,
            summary: 200,
            exp_company: 20,
            exp_role: 20,
            exp_description: 60,
            exp_count: 3,
            skill_name: 12,
            skill_count: 8,
            edu_school: 25,
            edu_degree: 20,
            edu_count: 2,
        }
    }
}

/// Physical page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
        aspect_ratio: 210.0 / 297.0,
    };

    pub const LETTER: PageSize = PageSize {
        width: 216.0,
        height: 279.0,
        aspect_ratio: 216.0 / 279.0,
    };

    /// Looks up a page format by name (`a4` or `letter`, any case).
    pub fn from_name(name: &str) -> Option<PageSize> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(Self::A4),
            "letter" => Some(Self::LETTER),
            _ => None,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_limits_fill_from_defaults() {
        let limits: LayoutLimits =
            serde_json::from_str(r#"{"summary": 150, "skillCount": 6}"#).unwrap();
        assert_eq!(limits.summary, 150);
        assert_eq!(limits.skill_count, 6);
        assert_eq!(limits.full_name, 15);
        assert_eq!(limits.edu_count, 2);
    }

    #[test]
    fn test_page_size_serializes_aspect_ratio_camel_case() {
        let value = serde_json::to_value(PageSize::LETTER).unwrap();
        assert_eq!(value["width"], 216.0);
        assert!(value.get("aspectRatio").is_some());
    }

    #[test]
    fn test_page_size_from_name() {
        assert_eq!(PageSize::from_name("A4"), Some(PageSize::A4));
        assert_eq!(PageSize::from_name(" letter "), Some(PageSize::LETTER));
        assert_eq!(PageSize::from_name("legal"), None);
    }
}
