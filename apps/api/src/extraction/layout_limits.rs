//! Infers per-field content budgets from a template's markup.
//!
//! Heuristics only: denser layouts (two columns, a photo header, small type in
//! the experience section, badge-style skills) get tighter or looser limits.

use crate::models::LayoutLimits;

const EXPERIENCE_SECTION_MARKERS: [(&str, &str); 2] = [
    ("START_EXPERIENCE_LOOP", "END_EXPERIENCE_LOOP"),
    ("EXPERIENCE_LOOP_START", "EXPERIENCE_LOOP_END"),
];

pub fn analyze_layout_limits(html: &str) -> LayoutLimits {
    let mut limits = LayoutLimits::default();

    let is_two_column = html.contains("grid-cols-2")
        || (html.contains("flex") && html.contains("w-1/3"))
        || html.contains("w-2/5")
        || html.contains("w-3/5");
    if is_two_column {
        limits.summary = 150;
        limits.exp_description = 50;
        limits.skill_count = 6;
    }

    let has_photo = html.contains("{{photo_src}}") || html.contains("photo");
    if has_photo {
        limits.full_name = 12;
        limits.title = 20;
    }

    if let Some(section) = experience_section(html) {
        if section.contains("text-xs") {
            limits.exp_description = 80;
        } else if section.contains("text-sm") {
            limits.exp_description = 60;
        }
    }

    let has_badge_skills = html.to_lowercase().contains("skill")
        && (html.contains("rounded-full") || html.contains("badge"));
    if has_badge_skills {
        limits.skill_name = 10;
        limits.skill_count = 10;
    }

    limits
}

/// The text between the first experience start marker and its end marker.
fn experience_section(html: &str) -> Option<&str> {
    EXPERIENCE_SECTION_MARKERS.iter().find_map(|(start, end)| {
        let from = html.find(start)?;
        let to = html[from..].find(end)? + from;
        Some(&html[from..to])
    })
}
