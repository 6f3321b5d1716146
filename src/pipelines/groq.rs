use crate::config::models::get_llm_config;
use crate::pipelines::perf::{self, PerfTimer};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tokio::time::{timeout, Duration};

const SYSTEM_PROMPT: &str = "You are a helpful educational assistant.";

/// Reusable HTTP client singleton (created once, reused for all requests)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        let config = get_llm_config();
        Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to create HTTP client")
    })
}

fn api_key() -> Result<String> {
    std::env::var("GROQ_API_KEY")
        .context("GROQ_API_KEY not found. Add it to the environment or a .env file")
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Call the chat-completions API and return the trimmed response text.
pub async fn call_chat_model(
    model: &str,
    prompt: &str,
    temperature: f32,
    max_tokens: u32,
) -> Result<String> {
    let config = get_llm_config();
    call_chat_model_with_timeout(
        model,
        prompt,
        temperature,
        max_tokens,
        Duration::from_secs(config.timeout_secs),
    )
    .await
}

/// Call the chat-completions API with a custom timeout
pub async fn call_chat_model_with_timeout(
    model: &str,
    prompt: &str,
    temperature: f32,
    max_tokens: u32,
    timeout_duration: Duration,
) -> Result<String> {
    let _perf = PerfTimer::new("chat_call");
    let start = std::time::Instant::now();

    let result = timeout(timeout_duration, async {
        let client = get_http_client();
        let key = api_key()?;
        let url = format!("{}/chat/completions", get_llm_config().api_base);

        let response = client
            .post(&url)
            .bearer_auth(&key)
            .json(&ChatRequest {
                model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: prompt,
                    },
                ],
                temperature,
                max_tokens,
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach chat API for model '{}'", model))?
            .error_for_status()
            .with_context(|| format!("Chat API rejected request for model '{}'", model))?;

        let parsed: ChatResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to decode response from model '{}'", model))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default()
            .trim()
            .to_string();

        if content.is_empty() {
            anyhow::bail!("Model '{}' returned empty response", model);
        }

        Ok(content)
    })
    .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(response)) => {
            perf::log_perf_with_context("chat_call", latency_ms, model);
            tracing::info!(model = model, latency_ms = latency_ms, "Model call succeeded");
            Ok(response)
        }
        Ok(Err(e)) => {
            tracing::warn!(model = model, latency_ms = latency_ms, error = %e, "Model call failed");
            Err(e)
        }
        Err(_) => {
            tracing::error!(
                model = model,
                duration_secs = timeout_duration.as_secs(),
                "Timeout exceeded"
            );
            anyhow::bail!(
                "Model '{}' call timed out after {}s",
                model,
                timeout_duration.as_secs()
            )
        }
    }
}
