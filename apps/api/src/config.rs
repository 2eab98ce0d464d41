use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://apis.iflow.cn/v1/chat/completions";
const DEFAULT_VISION_MODEL: &str = "qwen3-vl-plus";
const DEFAULT_TEXT_MODEL: &str = "glm-4.6";

/// Application configuration loaded from environment variables.
/// Every key has a default; a missing `LLM_API_KEY` only disables the AI endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm_api_url: String,
    pub llm_api_key: Option<String>,
    pub vision_model: String,
    pub text_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_api_key: None,
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_api_key: optional_env("LLM_API_KEY"),
            vision_model: optional_env("VISION_MODEL").unwrap_or(defaults.vision_model),
            text_model: optional_env("TEXT_MODEL").unwrap_or(defaults.text_model),
        })
    }
}

/// The variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
