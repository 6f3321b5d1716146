use crate::cache;
use crate::circuit_breaker::{CircuitBreaker, ExponentialBackoff};
use crate::config::models::get_llm_config;
use crate::pipelines::{groq, parse};
use crate::planner::profiles::{profile, Difficulty};
use crate::planner::topics::{Topic, DEFAULT_PRIORITY};
use crate::state::app::AppState;
use anyhow::Result;

/// Below this count the generated list is discarded for the fallback.
pub const MIN_SUBTOPICS: usize = 4;

const MAX_RETRIES: u32 = 2;

/// Topic-expansion capability.
///
/// `Llm` asks a hosted chat model to break one chapter into subtopics;
/// `Static` works fully offline. Both are fallback-protected: `expand`
/// never fails and always returns at least [`MIN_SUBTOPICS`] items.
pub enum TopicExpander {
    Llm(LlmExpander),
    Static,
}

impl TopicExpander {
    pub fn llm() -> Self {
        TopicExpander::Llm(LlmExpander::new())
    }

    /// Expand a chapter into an ordered subtopic list.
    ///
    /// Whatever the generative path produces, fewer than [`MIN_SUBTOPICS`]
    /// items (including errors and the offline variant) substitutes the
    /// fixed difficulty-specific list.
    pub async fn expand(
        &self,
        state: &AppState,
        topic: &str,
        difficulty: Difficulty,
    ) -> Vec<String> {
        let generated = match self {
            TopicExpander::Llm(expander) => match expander.generate(state, topic, difficulty).await
            {
                Ok(subtopics) => subtopics,
                Err(e) => {
                    tracing::warn!(topic = %topic, error = %e, "Topic expansion failed, using fallback");
                    Vec::new()
                }
            },
            TopicExpander::Static => Vec::new(),
        };

        if generated.len() >= MIN_SUBTOPICS {
            generated
        } else {
            state.record_fallback();
            fallback_subtopics(topic, difficulty)
        }
    }
}

/// Chat-model-backed expander with retry, caching, and a circuit breaker.
pub struct LlmExpander {
    breaker: CircuitBreaker,
}

impl LlmExpander {
    pub fn new() -> Self {
        LlmExpander {
            breaker: CircuitBreaker::new(60, 3),
        }
    }

    async fn generate(
        &self,
        state: &AppState,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<String>> {
        let config = get_llm_config();
        let prompt = expansion_prompt(topic, difficulty);

        if let Some(cached) = cache::get_cached::<Vec<String>>(state, &config.expander_model, &prompt)
        {
            return Ok(cached);
        }

        if self.breaker.is_open() {
            anyhow::bail!("expander circuit open, skipping model call");
        }

        let temperature = if difficulty == Difficulty::Hard {
            config.hard_temperature
        } else {
            config.temperature
        };

        let backoff = ExponentialBackoff::default();

        for attempt in 0..=MAX_RETRIES {
            let start = std::time::Instant::now();
            match groq::call_chat_model(&config.expander_model, &prompt, temperature, config.max_tokens)
                .await
            {
                Ok(raw) => {
                    let latency_ms = start.elapsed().as_millis() as u64;
                    self.breaker.record_success();
                    state.record_expansion_success(latency_ms);

                    let subtopics = parse::parse_numbered_list(&parse::normalize_text(&raw));
                    if let Err(e) =
                        cache::cache_response(state, &config.expander_model, &prompt, &subtopics)
                    {
                        tracing::warn!(error = %e, "Failed to cache expansion response");
                    }
                    return Ok(subtopics);
                }
                Err(e) => {
                    self.breaker.record_failure();
                    state.record_expansion_failure();
                    if attempt < MAX_RETRIES {
                        let delay_ms = backoff.jittered_delay_for_attempt(attempt);
                        tracing::warn!(
                            error = %e,
                            attempt = attempt + 1,
                            max_retries = MAX_RETRIES + 1,
                            delay_ms = delay_ms,
                            "Expansion call failed, retrying with backoff"
                        );
                        tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                    } else {
                        tracing::error!(
                            error = %e,
                            attempts = MAX_RETRIES + 1,
                            "Expansion call failed after all retries"
                        );
                        return Err(e);
                    }
                }
            }
        }

        unreachable!()
    }
}

impl Default for LlmExpander {
    fn default() -> Self {
        Self::new()
    }
}

fn expansion_prompt(topic: &str, difficulty: Difficulty) -> String {
    let hint = profile(difficulty).prompt_hint;
    format!(
        r#"You are a qualified academic instructor.

A student provided only ONE chapter name:

"{topic}"

You must infer appropriate subtopics based on difficulty level.

---------------------------------------
DIFFICULTY LEVEL: {difficulty_upper}
GUIDANCE:
{hint}
---------------------------------------

SYLLABUS RULES:
- Easy   -> basic understanding, minimal theory
- Medium -> normal curriculum depth
- Hard   -> detailed conceptual and analytical depth

---------------------------------------
OUTPUT REQUIREMENTS:
- Return 6-12 subtopics
- Each subtopic must be 3-6 words only
- Curriculum-appropriate
- No explanations
- No commentary
- No headings
- Output MUST be numbered list only

EXAMPLE FORMAT:
1. Subtopic name
2. Subtopic name
3. Subtopic name
"#,
        topic = topic,
        difficulty_upper = difficulty.as_str().to_uppercase(),
        hint = hint,
    )
}

/// Fixed difficulty-tiered subtopic lists, deterministic for a given input.
pub fn fallback_subtopics(topic: &str, difficulty: Difficulty) -> Vec<String> {
    match difficulty {
        Difficulty::Easy => vec![
            format!("Introduction to {topic}"),
            "Basic definitions".to_string(),
            "Main ideas overview".to_string(),
            "Simple examples".to_string(),
            "Important terms".to_string(),
            "Revision summary".to_string(),
        ],
        Difficulty::Hard => vec![
            format!("Conceptual foundations of {topic}"),
            "Detailed internal mechanisms".to_string(),
            "Mathematical or logical structure".to_string(),
            "Process flow analysis".to_string(),
            "Limitations and assumptions".to_string(),
            "Advanced examples".to_string(),
            "Common misconceptions".to_string(),
            "Exam-oriented problem solving".to_string(),
        ],
        Difficulty::Medium => vec![
            format!("Introduction to {topic}"),
            "Key concepts".to_string(),
            "Important components".to_string(),
            "Functions and roles".to_string(),
            "Working mechanism".to_string(),
            "Examples and diagrams".to_string(),
            "Summary and revision".to_string(),
        ],
    }
}

/// Turn expansion output into scheduler-ready synthetic topics, each
/// inheriting the base topic's difficulty.
pub fn into_synthetic_topics(base: &Topic, subtopics: &[String]) -> Vec<Topic> {
    subtopics
        .iter()
        .map(|sub| Topic {
            name: format!("{} — {}", base.name, sub),
            difficulty: base.difficulty,
            priority: DEFAULT_PRIORITY.to_string(),
        })
        .collect()
}
