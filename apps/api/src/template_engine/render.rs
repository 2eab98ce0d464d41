use tracing::{debug, warn};

use crate::models::ResumeData;
use crate::template_engine::blocks::{expand_blocks, strip_leftover_markers, EDUCATION, EXPERIENCE};
use crate::template_engine::escape::escape_html;
use crate::template_engine::tokens::{fill_tokens, strip_unresolved, Substitution};

/// Returned whenever the template or the record is missing.
pub const LOADING_PLACEHOLDER: &str =
    r#"<div class="p-8 text-center text-gray-500">Resume preview loading...</div>"#;

/// Avatar used for `{{photo_src}}` when the record has no photo.
pub const DEFAULT_PHOTO_SRC: &str =
    "https://api.dicebear.com/9.x/notionists/svg?seed=Felix&backgroundColor=e5e7eb";

const NAME_FALLBACK: &str = "Your Name";
const TITLE_FALLBACK: &str = "Job Title";

/// Badge colours for `{{skill_tags}}`.
const SKILL_TAGS_PALETTE: &str = "bg-indigo-100 text-indigo-700";
/// Badge colours for `{{skills}}`.
const SKILLS_PALETTE: &str = "bg-gray-100 text-gray-700";

/// Merges `data` into `template` and returns the final markup.
///
/// Steps run in a fixed order: scalar tokens, experience blocks, education
/// blocks, skill badges, cleanup. Every record value is HTML-escaped once as
/// it is substituted. Never fails: missing inputs produce
/// [`LOADING_PLACEHOLDER`] and unknown tokens are removed.
pub fn render_template(template: Option<&str>, data: Option<&ResumeData>) -> String {
    let (template, data) = match (template, data) {
        (Some(template), Some(data)) if !template.is_empty() => (template, data),
        _ => {
            warn!("Template engine called without a template or data; returning placeholder");
            return LOADING_PLACEHOLDER.to_string();
        }
    };

    let html = fill_tokens(template, &scalar_substitutions(data));
    let html = expand_blocks(&html, &EXPERIENCE, &data.experience);
    let html = expand_blocks(&html, &EDUCATION, &data.education);
    let html = substitute_skill_tags(&html, &data.skills);
    let html = cleanup(&html);

    debug!(
        "Rendered template: {} -> {} bytes ({} experience, {} education, {} skills)",
        template.len(),
        html.len(),
        data.experience.len(),
        data.education.len(),
        data.skills.len()
    );

    html
}

fn scalar_substitutions(data: &ResumeData) -> Vec<Substitution> {
    let contact = &data.contact;
    let photo = data
        .photo_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PHOTO_SRC);

    vec![
        ("fullName", escape_html(or_fallback(&data.full_name, NAME_FALLBACK))),
        ("title", escape_html(or_fallback(&data.title, TITLE_FALLBACK))),
        ("email", escape_html(&contact.email)),
        ("phone", escape_html(&contact.phone)),
        ("location", escape_html(&contact.location)),
        ("summary", escape_html(&data.summary)),
        ("linkedin", escape_html(contact.linkedin())),
        ("website", escape_html(contact.website())),
        ("photo_src", escape_html(photo)),
    ]
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Both tag-list spellings are filled in one pass so badge text that happens
/// to contain the other spelling is never treated as a token.
fn substitute_skill_tags(html: &str, skills: &[String]) -> String {
    let mut substitutions: Vec<Substitution> = Vec::new();
    if html.contains("{{skill_tags}}") {
        substitutions.push(("skill_tags", skill_badges(skills, SKILL_TAGS_PALETTE)));
    }
    if html.contains("{{skills}}") {
        substitutions.push(("skills", skill_badges(skills, SKILLS_PALETTE)));
    }
    if substitutions.is_empty() {
        return html.to_string();
    }
    fill_tokens(html, &substitutions)
}

fn skill_badges(skills: &[String], palette: &str) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="inline-block {palette} text-xs font-medium px-3 py-1 rounded-full mr-2 mb-2">{}</span>"#,
                escape_html(skill)
            )
        })
        .collect()
}

fn cleanup(html: &str) -> String {
    let html = strip_unresolved(html);
    let html = strip_leftover_markers(&html, &EXPERIENCE);
    strip_leftover_markers(&html, &EDUCATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, EducationEntry, ExperienceEntry};

    const EXPERIENCE_BLOCK: &str = "<section><!-- START_EXPERIENCE_LOOP --><article class=\"job-card\">\
        <h3>{{exp_role}} @ {{exp_company}}</h3><span>{{exp_duration}}</span>{{exp_description}}\
        </article><!-- END_EXPERIENCE_LOOP --></section>";

    fn job(company: &str) -> ExperienceEntry {
        ExperienceEntry {
            company: company.to_string(),
            role: "Backend Engineer".to_string(),
            duration: "2021 - 2024".to_string(),
            description: vec!["Owned the payments API".to_string()],
        }
    }

    fn sample() -> ResumeData {
        ResumeData {
            full_name: "Grace Hopper".to_string(),
            title: "Rear Admiral".to_string(),
            photo_url: None,
            contact: Contact {
                email: "grace@navy.mil".to_string(),
                phone: "555-0100".to_string(),
                location: "Arlington, VA".to_string(),
                linkedin: Some("in/grace".to_string()),
                website: None,
            },
            summary: "Compiler pioneer.".to_string(),
            experience: vec![job("Navy"), job("Remington Rand")],
            skills: vec!["COBOL".to_string(), "Compilers".to_string()],
            education: vec![EducationEntry {
                school: "Yale".to_string(),
                degree: "PhD Mathematics".to_string(),
                year: "1934".to_string(),
            }],
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let template = "<p>{{fullName}}</p><!-- START_EDUCATION_LOOP --><span>{{edu_school}}</span><!-- END_EDUCATION_LOOP -->";
        let data: ResumeData = serde_json::from_value(serde_json::json!({
            "fullName": "A&B",
            "education": [{ "school": "X" }, { "school": "Y" }]
        }))
        .unwrap();

        assert_eq!(
            render_template(Some(template), Some(&data)),
            "<p>A&amp;B</p><span>X</span><span>Y</span>"
        );
    }

    #[test]
    fn test_missing_inputs_return_placeholder() {
        assert_eq!(render_template(Some(""), None), LOADING_PLACEHOLDER);
        assert_eq!(render_template(None, Some(&sample())), LOADING_PLACEHOLDER);
        assert_eq!(render_template(Some(""), Some(&sample())), LOADING_PLACEHOLDER);
        assert_eq!(render_template(Some("<p>{{fullName}}</p>"), None), LOADING_PLACEHOLDER);
    }

    #[test]
    fn test_scalar_values_are_escaped() {
        let mut data = sample();
        data.summary = r#"<script>&"'</script>"#.to_string();
        let out = render_template(Some("<p>{{summary}}</p><i>{{summary}}</i>"), Some(&data));
        assert_eq!(
            out,
            "<p>&lt;script&gt;&amp;&quot;&#039;&lt;/script&gt;</p><i>&lt;script&gt;&amp;&quot;&#039;&lt;/script&gt;</i>"
        );
    }

    #[test]
    fn test_name_and_title_fall_back_to_labels() {
        let out = render_template(
            Some("{{fullName}}|{{title}}|{{email}}|{{linkedin}}|{{website}}"),
            Some(&ResumeData::default()),
        );
        assert_eq!(out, "Your Name|Job Title|||");
    }

    #[test]
    fn test_photo_defaults_to_avatar_service() {
        let out = render_template(Some(r#"<img src="{{photo_src}}">"#), Some(&sample()));
        assert_eq!(
            out,
            r#"<img src="https://api.dicebear.com/9.x/notionists/svg?seed=Felix&amp;backgroundColor=e5e7eb">"#
        );

        let mut data = sample();
        data.photo_url = Some("https://cdn.example.com/me.jpg".to_string());
        let out = render_template(Some(r#"<img src="{{photo_src}}">"#), Some(&data));
        assert_eq!(out, r#"<img src="https://cdn.example.com/me.jpg">"#);
    }

    #[test]
    fn test_experience_block_count_matches_entries() {
        let mut data = sample();
        for n in [0usize, 1, 2, 5] {
            data.experience = (0..n).map(|i| job(&format!("Company {i}"))).collect();
            let out = render_template(Some(EXPERIENCE_BLOCK), Some(&data));
            assert_eq!(out.matches("class=\"job-card\"").count(), n, "for {n} entries");
        }
    }

    #[test]
    fn test_experience_entries_render_in_order() {
        let out = render_template(Some(EXPERIENCE_BLOCK), Some(&sample()));
        let navy = out.find("Backend Engineer @ Navy").unwrap();
        let rand = out.find("Backend Engineer @ Remington Rand").unwrap();
        assert!(navy < rand);
        assert!(out.contains("<li>Owned the payments API</li>"));
    }

    #[test]
    fn test_all_scalar_tokens_with_empty_collections_leave_no_syntax() {
        let template = "<h1>{{fullName}}</h1><h2>{{title}}</h2><p>{{email}} {{phone}} {{location}}</p>\
            <p>{{summary}}</p><a>{{linkedin}}</a><a>{{website}}</a><img src=\"{{photo_src}}\">\
            <!-- START_EXPERIENCE_LOOP --><div>{{exp_company}}</div><!-- END_EXPERIENCE_LOOP -->\
            <!-- EDUCATION_LOOP_START --><div>{{edu_school}}</div><!-- EDUCATION_LOOP_END -->\
            <div>{{skill_tags}}</div>";
        let mut data = sample();
        data.experience.clear();
        data.education.clear();
        data.skills.clear();

        let out = render_template(Some(template), Some(&data));
        assert_eq!(out.matches("{{").count(), 0);
        assert_eq!(out.matches("<!-- START_").count(), 0);
        assert_eq!(out.matches("<!-- END_").count(), 0);
        assert!(out.contains("<h1>Grace Hopper</h1>"));
    }

    #[test]
    fn test_templates_without_known_tokens_are_unchanged() {
        let template = "<div class=\"page\"><p>Static & plain</p><!-- layout note --></div>";
        assert_eq!(render_template(Some(template), Some(&sample())), template);
    }

    #[test]
    fn test_unknown_tokens_are_removed() {
        let out = render_template(Some("<p>{{fullName}}{{nickname}}</p>"), Some(&sample()));
        assert_eq!(out, "<p>Grace Hopper</p>");
    }

    #[test]
    fn test_skill_tag_spellings_use_distinct_palettes() {
        let out = render_template(Some("<div>{{skill_tags}}</div><div>{{skills}}</div>"), Some(&sample()));
        assert_eq!(out.matches("bg-indigo-100 text-indigo-700").count(), 2);
        assert_eq!(out.matches("bg-gray-100 text-gray-700").count(), 2);
        assert!(out.contains(">COBOL</span><span"));
    }

    #[test]
    fn test_skill_badges_are_escaped() {
        let mut data = sample();
        data.skills = vec!["C++ & <Rust>".to_string()];
        let out = render_template(Some("{{skills}}"), Some(&data));
        assert!(out.contains(">C++ &amp; &lt;Rust&gt;</span>"));
    }

    #[test]
    fn test_skill_text_containing_other_spelling_survives_as_text() {
        let mut data = sample();
        data.skills = vec!["{{skills}}".to_string()];
        let out = render_template(Some("{{skill_tags}}"), Some(&data));
        // Badge text is not expanded again; cleanup removes the literal token.
        assert_eq!(out.matches("<span").count(), 1);
    }

    #[test]
    fn test_tokens_inside_values_are_filled_by_later_steps() {
        let mut data = sample();
        data.summary = "{{exp_company}} {{skills}}".to_string();
        data.experience = vec![job("Secret")];
        data.skills = vec!["Rust".to_string()];

        let out = render_template(Some("<p>{{summary}}</p>"), Some(&data));
        assert_eq!(
            out,
            r#"<p>Secret <span class="inline-block bg-gray-100 text-gray-700 text-xs font-medium px-3 py-1 rounded-full mr-2 mb-2">Rust</span></p>"#
        );
    }

    #[test]
    fn test_tokens_inside_values_stay_escaped() {
        let mut data = sample();
        data.summary = "<i>{{exp_company}}</i>".to_string();
        data.experience = vec![job("<Secret>")];

        let out = render_template(Some("<p>{{summary}}</p>"), Some(&data));
        assert_eq!(out, "<p>&lt;i&gt;&lt;Secret&gt;&lt;/i&gt;</p>");
    }

    #[test]
    fn test_bare_education_tokens_fall_back_to_first_entry() {
        let mut data = sample();
        data.education = vec![
            EducationEntry {
                school: "Vassar".to_string(),
                ..Default::default()
            },
            EducationEntry {
                school: "Yale".to_string(),
                ..Default::default()
            },
        ];
        let out = render_template(Some("<h3>{{edu_school}}</h3>"), Some(&data));
        assert_eq!(out, "<h3>Vassar</h3>");
    }

    #[test]
    fn test_orphan_marker_survives_cleanup() {
        let out = render_template(
            Some("<!-- START_EXPERIENCE_LOOP --><p>{{title}}</p>"),
            Some(&sample()),
        );
        assert_eq!(out, "<!-- START_EXPERIENCE_LOOP --><p>Rear Admiral</p>");
    }

    #[test]
    fn test_mixed_spelling_pair_markers_are_cleaned() {
        let out = render_template(
            Some("<!-- START_EDUCATION_LOOP --><p>{{title}}</p><!-- EDUCATION_LOOP_END -->"),
            Some(&sample()),
        );
        assert_eq!(out, "<p>Rear Admiral</p>");
    }

    #[test]
    fn test_render_does_not_mutate_inputs() {
        let data = sample();
        let before = data.clone();
        let template = String::from(EXPERIENCE_BLOCK);
        let _ = render_template(Some(&template), Some(&data));
        assert_eq!(data, before);
        assert_eq!(template, EXPERIENCE_BLOCK);
    }
}
