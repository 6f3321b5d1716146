pub mod expander;
pub mod profiles;
pub mod schedule;
pub mod topics;

use crate::error::PlanError;
use crate::state::app::AppState;
use chrono::NaiveDate;
use self::expander::TopicExpander;
use self::profiles::Difficulty;
use self::schedule::{build_schedule, DayPlan};
use self::topics::{is_single_topic, parse_topics};

/// High-level planner: parse the topic text, expand a lone chapter into
/// subtopics, then build the day-by-day schedule.
pub async fn generate_study_plan(
    state: &AppState,
    expander: &TopicExpander,
    exam_date: NaiveDate,
    daily_hours: u32,
    topics_text: &str,
) -> Result<Vec<DayPlan>, PlanError> {
    let mut topics = parse_topics(topics_text);

    if topics.is_empty() {
        return Err(PlanError::EmptyInput);
    }

    if is_single_topic(&topics) {
        let base = topics[0].clone();
        let subtopics = expander.expand(state, &base.name, base.difficulty).await;
        tracing::info!(
            topic = %base.name,
            difficulty = %base.difficulty,
            subtopics = subtopics.len(),
            "Expanded single topic"
        );
        topics = expander::into_synthetic_topics(&base, &subtopics);
    }

    let plan = build_schedule(&topics, exam_date, daily_hours)?;

    let scheduled: u32 = plan.iter().map(|d| d.total_minutes()).sum();
    tracing::info!(
        days = plan.len(),
        topics = topics.len(),
        scheduled = %minutes_to_readable(scheduled),
        "Study plan built"
    );

    Ok(plan)
}

/// Public expansion contract: an ordered subtopic list, length >= 4
/// guaranteed by the fallback.
pub async fn expand_topic(
    state: &AppState,
    expander: &TopicExpander,
    topic: &str,
    difficulty: Difficulty,
) -> Vec<String> {
    expander.expand(state, topic, difficulty).await
}

/// Render a minute count the way the plan views show it.
pub fn minutes_to_readable(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    if mins == 0 {
        format!("{hours} hours")
    } else {
        format!("{hours} hour {mins} min")
    }
}
