use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::extraction::prompts::STRATEGIST_PROMPT_TEMPLATE;
use crate::extraction::validation::validate_and_truncate;
use crate::extraction::ExtractionError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_code_fences, ChatBackend, ChatRequest, ContentPart};
use crate::models::{LayoutLimits, ResumeData};

const MAX_JD_CHARS: usize = 4000;
const MAX_RESUME_CHARS: usize = 12000;
const STRATEGIST_TEMPERATURE: f64 = 0.3;
const STRATEGIST_MAX_TOKENS: u32 = 4096;

static INPUT_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(jd_text|resume_text)\}").expect("valid input-slot regex"));

/// Rewrites a raw resume for a job description and returns a record that fits
/// `limits`.
pub async fn extract_data_from_text(
    backend: &dyn ChatBackend,
    model: &str,
    resume_text: &str,
    jd_text: &str,
    limits: &LayoutLimits,
) -> Result<ResumeData, ExtractionError> {
    let prompt = build_strategist_prompt(
        head_chars(resume_text, MAX_RESUME_CHARS),
        head_chars(jd_text, MAX_JD_CHARS),
        limits,
    );

    info!(
        "Content extraction started (model: {model}, resume {} chars, jd {} chars)",
        resume_text.chars().count(),
        jd_text.chars().count()
    );

    let reply = backend
        .complete(ChatRequest {
            model: model.to_string(),
            system: Some(JSON_ONLY_SYSTEM.to_string()),
            parts: vec![ContentPart::Text(prompt)],
            temperature: STRATEGIST_TEMPERATURE,
            max_tokens: STRATEGIST_MAX_TOKENS,
        })
        .await?;

    let cleaned = strip_code_fences(&reply);
    let json = json_object_slice(&cleaned).ok_or(ExtractionError::MissingJson)?;
    let parsed: ResumeData = serde_json::from_str(json)?;

    debug!(
        "Extracted {} experience entries, {} skills",
        parsed.experience.len(),
        parsed.skills.len()
    );

    Ok(validate_and_truncate(parsed, limits))
}

fn build_strategist_prompt(resume_text: &str, jd_text: &str, limits: &LayoutLimits) -> String {
    let prompt = STRATEGIST_PROMPT_TEMPLATE
        .replace("{limit_full_name}", &limits.full_name.to_string())
        .replace("{limit_title}", &limits.title.to_string())
        .replace("{limit_summary}", &limits.summary.to_string())
        .replace("{limit_exp_company}", &limits.exp_company.to_string())
        .replace("{limit_exp_role}", &limits.exp_role.to_string())
        .replace("{limit_exp_description}", &limits.exp_description.to_string())
        .replace("{limit_exp_count}", &limits.exp_count.to_string())
        .replace("{limit_skill_name}", &limits.skill_name.to_string())
        .replace("{limit_skill_count}", &limits.skill_count.to_string())
        .replace("{limit_edu_school}", &limits.edu_school.to_string())
        .replace("{limit_edu_degree}", &limits.edu_degree.to_string())
        .replace("{limit_edu_count}", &limits.edu_count.to_string());

    // Both inputs go in one pass so neither can fill a slot quoted by the other.
    INPUT_SLOT
        .replace_all(&prompt, |caps: &Captures| match &caps[1] {
            "jd_text" => jd_text,
            _ => resume_text,
        })
        .into_owned()
}

/// The first `max` characters of `text`.
fn head_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Everything from the first `{` to the last `}` inclusive.
fn json_object_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubBackend;

    const REPLY: &str = r#"Sure! Here is the record:
```json
{
  "fullName": "Grace Brewster Murray Hopper",
  "title": "Rear Admiral",
  "contact": {"email": "grace@navy.mil", "phone": "", "location": "Arlington"},
  "summary": "Compiler pioneer.",
  "experience": [
    {"company": "Remington Rand", "role": "Senior Mathematician", "duration": "1949 - 1967", "description": "Led the A-0 compiler"}
  ],
  "skills": ["COBOL", "FLOW-MATIC"],
  "education": [{"school": "Yale", "degree": "PhD Mathematics", "year": "1934"}]
}
```"#;

    #[test]
    fn test_head_chars_respects_char_boundaries() {
        assert_eq!(head_chars("héllo", 2), "hé");
        assert_eq!(head_chars("abc", 10), "abc");
    }

    #[test]
    fn test_json_object_slice() {
        assert_eq!(json_object_slice("x {\"a\": {}} y"), Some("{\"a\": {}}"));
        assert_eq!(json_object_slice("no json here"), None);
        assert_eq!(json_object_slice("} backwards {"), None);
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let prompt = build_strategist_prompt("resume", "jd", &LayoutLimits::default());
        assert!(!prompt.contains("{limit_"));
        assert!(!prompt.contains("{jd_text}"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(prompt.contains("| fullName | 15 |"));
    }

    #[test]
    fn test_inputs_quoting_each_others_slot_stay_literal() {
        let prompt = build_strategist_prompt(
            "Resume body, see {jd_text}",
            "Paste {resume_text} here",
            &LayoutLimits::default(),
        );
        assert!(prompt.contains("Paste {resume_text} here"));
        assert!(prompt.contains("Resume body, see {jd_text}"));
        assert_eq!(prompt.matches("Resume body").count(), 1);
    }

    #[tokio::test]
    async fn test_extracts_and_validates_record() {
        let backend = StubBackend::replying(REPLY);
        let data = extract_data_from_text(
            &backend,
            "glm-4.6",
            "Grace Hopper resume",
            "Compiler engineer",
            &LayoutLimits::default(),
        )
        .await
        .unwrap();

        assert_eq!(data.full_name, "Grace Brewster…");
        assert_eq!(data.contact.phone, "Contact via HR");
        assert_eq!(data.experience[0].description, vec!["Led the A-0 compiler"]);
        assert_eq!(data.skills, vec!["COBOL", "FLOW-MATIC"]);

        let request = backend.last_request();
        assert_eq!(request.system.as_deref(), Some(JSON_ONLY_SYSTEM));
        assert_eq!(request.model, "glm-4.6");
    }

    #[tokio::test]
    async fn test_long_inputs_are_cut_before_sending() {
        let backend = StubBackend::replying(REPLY);
        let resume = "r".repeat(MAX_RESUME_CHARS + 500);
        let jd = "j".repeat(MAX_JD_CHARS + 500);
        extract_data_from_text(&backend, "m", &resume, &jd, &LayoutLimits::default())
            .await
            .unwrap();

        match &backend.last_request().parts[0] {
            ContentPart::Text(prompt) => {
                assert!(prompt.contains(&"r".repeat(MAX_RESUME_CHARS)));
                assert!(!prompt.contains(&"r".repeat(MAX_RESUME_CHARS + 1)));
                assert!(!prompt.contains(&"j".repeat(MAX_JD_CHARS + 1)));
            }
            other => panic!("expected text prompt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reply_without_json_fails() {
        let backend = StubBackend::replying("I cannot help with that.");
        let err = extract_data_from_text(&backend, "m", "r", "j", &LayoutLimits::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::MissingJson));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let backend = StubBackend::replying("{\"fullName\": }");
        let err = extract_data_from_text(&backend, "m", "r", "j", &LayoutLimits::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }
}
