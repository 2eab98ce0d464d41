//! Post-extraction clean-up: every field trimmed, cut to its layout budget and
//! back-filled with a placeholder when the model left it empty.

use crate::models::{Contact, EducationEntry, ExperienceEntry, LayoutLimits, ResumeData};

const MAX_DESCRIPTION_LINES: usize = 4;
const MAX_EMAIL: usize = 50;
const MAX_PHONE: usize = 20;
const MAX_LOCATION: usize = 20;
const MAX_PROFILE_URL: usize = 50;
const MAX_DURATION: usize = 20;
const MAX_YEAR: usize = 15;

const DEFAULT_SUMMARY: &str = "Experienced professional with a strong industry background.";

/// Trims `value` and, when it is longer than `max` characters, cuts it to
/// `max - 1` characters followed by an ellipsis.
pub fn truncate(value: &str, max: usize) -> String {
    let value = value.trim();
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn truncate_or(value: &str, max: usize, fallback: &str) -> String {
    let cut = truncate(value, max);
    if cut.is_empty() {
        fallback.to_string()
    } else {
        cut
    }
}

fn truncate_optional(value: Option<&str>, max: usize) -> Option<String> {
    value.map(|v| truncate(v, max)).filter(|v| !v.is_empty())
}

pub fn validate_and_truncate(data: ResumeData, limits: &LayoutLimits) -> ResumeData {
    let contact = Contact {
        email: truncate_or(&data.contact.email, MAX_EMAIL, "contact@example.com"),
        phone: truncate_or(&data.contact.phone, MAX_PHONE, "Contact via HR"),
        location: truncate_or(&data.contact.location, MAX_LOCATION, "TBD"),
        linkedin: truncate_optional(data.contact.linkedin.as_deref(), MAX_PROFILE_URL),
        website: truncate_optional(data.contact.website.as_deref(), MAX_PROFILE_URL),
    };

    let experience = data
        .experience
        .iter()
        .take(limits.exp_count)
        .map(|exp| ExperienceEntry {
            company: truncate_or(&exp.company, limits.exp_company, "Company Name"),
            role: truncate_or(&exp.role, limits.exp_role, "Position"),
            duration: truncate_or(&exp.duration, MAX_DURATION, "Dates"),
            description: exp
                .description
                .iter()
                .take(MAX_DESCRIPTION_LINES)
                .map(|line| truncate(line, limits.exp_description))
                .filter(|line| !line.is_empty())
                .collect(),
        })
        .collect();

    let skills = if data.skills.is_empty() {
        vec!["Skill 1".to_string(), "Skill 2".to_string(), "Skill 3".to_string()]
    } else {
        data.skills
    };
    let skills = skills
        .iter()
        .take(limits.skill_count)
        .map(|skill| truncate(skill, limits.skill_name))
        .collect();

    let education = data
        .education
        .iter()
        .take(limits.edu_count)
        .map(|edu| EducationEntry {
            school: truncate_or(&edu.school, limits.edu_school, "School Name"),
            degree: truncate_or(&edu.degree, limits.edu_degree, "Degree / Major"),
            year: truncate_or(&edu.year, MAX_YEAR, "Year"),
        })
        .collect();

    ResumeData {
        full_name: truncate_or(&data.full_name, limits.full_name, "Candidate"),
        title: truncate_or(&data.title, limits.title, "Job Seeker"),
        photo_url: data.photo_url.filter(|url| !url.trim().is_empty()),
        contact,
        summary: truncate_or(&data.summary, limits.summary, DEFAULT_SUMMARY),
        experience,
        skills,
        education,
    }
}
