use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Generation settings for the topic-expansion model.
///
/// The API key is deliberately absent: it is read from `GROQ_API_KEY` at
/// call time and never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub expander_model: String,
    pub api_base: String,
    pub temperature: f32,
    /// Temperature used for hard-difficulty expansions.
    pub hard_temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            expander_model: "llama-3.3-70b-versatile".to_string(),
            api_base: "https://api.groq.com/openai/v1".to_string(),
            temperature: 0.2,
            hard_temperature: 0.25,
            max_tokens: 400,
            timeout_secs: 60,
        }
    }
}

fn get_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("EXAMPLAN_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("examplan.toml")
}

fn load_llm_config_internal() -> LlmConfig {
    let config_path = get_config_path();

    if let Ok(content) = fs::read_to_string(&config_path) {
        match toml::from_str::<LlmConfig>(&content) {
            Ok(config) => {
                tracing::info!(path = ?config_path, "Loaded LLM config");
                return config;
            }
            Err(e) => {
                tracing::warn!(path = ?config_path, error = %e, "Failed to parse config, using defaults");
            }
        }
    }

    LlmConfig::default()
}

lazy_static! {
    static ref LLM_CONFIG: LlmConfig = load_llm_config_internal();
}

/// Get the cached LLM configuration (loaded once on first use).
pub fn get_llm_config() -> &'static LlmConfig {
    &LLM_CONFIG
}
