use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::extraction::layout_limits::analyze_layout_limits;
use crate::extraction::prompts::VISION_CLONE_PROMPT_TEMPLATE;
use crate::extraction::{ExtractionError, VisionResult};
use crate::llm_client::prompts::NO_PERSONAL_DATA_INSTRUCTION;
use crate::llm_client::{strip_code_fences, ChatBackend, ChatRequest, ContentPart};
use crate::models::PageSize;

/// Anything shorter cannot be a full page layout.
const MIN_TEMPLATE_CHARS: usize = 100;
const VISION_TEMPERATURE: f64 = 0.2;
const VISION_MAX_TOKENS: u32 = 8192;

static THINK_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think-block regex"));

/// Clones the design of a resume image into an HTML template.
///
/// `image_b64` is the base64 payload without a `data:` prefix. The page
/// container is sized to `page_size`.
pub async fn generate_template_from_image(
    backend: &dyn ChatBackend,
    model: &str,
    image_b64: &str,
    mime_type: &str,
    page_size: PageSize,
) -> Result<VisionResult, ExtractionError> {
    let prompt = vision_prompt(page_size);

    info!("Vision clone started (model: {model}, {} bytes of image data)", image_b64.len());

    let reply = backend
        .complete(ChatRequest {
            model: model.to_string(),
            system: None,
            parts: vec![
                ContentPart::ImageDataUrl(format!("data:{mime_type};base64,{image_b64}")),
                ContentPart::Text(prompt),
            ],
            temperature: VISION_TEMPERATURE,
            max_tokens: VISION_MAX_TOKENS,
        })
        .await?;

    let html_template = clean_template(&reply);
    let length = html_template.chars().count();
    if length < MIN_TEMPLATE_CHARS {
        return Err(ExtractionError::IncompleteTemplate { length });
    }

    debug!("Vision clone produced {length} characters of HTML");

    Ok(VisionResult {
        layout_limits: analyze_layout_limits(&html_template),
        html_template,
        page_size,
    })
}

fn vision_prompt(page_size: PageSize) -> String {
    VISION_CLONE_PROMPT_TEMPLATE
        .replace("{no_personal_data}", NO_PERSONAL_DATA_INSTRUCTION)
        .replace("{page_width}", &format!("{:.0}", page_size.width))
        .replace("{page_height}", &format!("{:.0}", page_size.height))
}

/// Strips code fences and `<think>` reasoning blocks from a model reply.
fn clean_template(reply: &str) -> String {
    let without_fences = strip_code_fences(reply);
    THINK_BLOCK
        .replace_all(&without_fences, "")
        .trim()
        .to_string()
}
