// Shared prompt fragments.
// Each stage that calls the model keeps its own prompts.rs alongside it;
// only cross-cutting instructions live here.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to prompts whose output must never carry real personal data.
pub const NO_PERSONAL_DATA_INSTRUCTION: &str = "\
    CRITICAL: Never copy names, contact details or other personal information \
    visible in the input. Every personal field MUST be a placeholder token.";
