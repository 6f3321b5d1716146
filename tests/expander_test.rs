use chrono::{Duration, Local};
use examplan::planner::expander::{
    fallback_subtopics, into_synthetic_topics, TopicExpander, MIN_SUBTOPICS,
};
use examplan::planner::expand_topic;
use examplan::{generate_study_plan, AppState, Difficulty, SessionKind, Topic};

#[test]
fn test_fallback_is_deterministic() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let first = fallback_subtopics("Thermodynamics", difficulty);
        let second = fallback_subtopics("Thermodynamics", difficulty);
        assert_eq!(first, second, "fallback must be byte-identical across calls");
    }
}

#[test]
fn test_fallback_sizes_per_tier() {
    assert_eq!(fallback_subtopics("X", Difficulty::Easy).len(), 6);
    assert_eq!(fallback_subtopics("X", Difficulty::Medium).len(), 7);
    assert_eq!(fallback_subtopics("X", Difficulty::Hard).len(), 8);
}

#[test]
fn test_fallback_parameterizes_topic_name() {
    let easy = fallback_subtopics("Thermodynamics", Difficulty::Easy);
    assert_eq!(easy[0], "Introduction to Thermodynamics");

    let hard = fallback_subtopics("Thermodynamics", Difficulty::Hard);
    assert_eq!(hard[0], "Conceptual foundations of Thermodynamics");
}

#[tokio::test]
async fn test_static_expander_always_falls_back() {
    let state = AppState::new();
    let expander = TopicExpander::Static;

    let subtopics = expand_topic(&state, &expander, "Thermodynamics", Difficulty::Medium).await;
    assert!(subtopics.len() >= MIN_SUBTOPICS);
    assert_eq!(subtopics, fallback_subtopics("Thermodynamics", Difficulty::Medium));

    assert_eq!(state.get_expander_metrics().fallback_count, 1);
}

#[test]
fn test_synthetic_topics_inherit_difficulty() {
    let base = Topic::new("Thermodynamics", Difficulty::Hard);
    let subtopics = fallback_subtopics(&base.name, base.difficulty);
    let synthetic = into_synthetic_topics(&base, &subtopics);

    assert_eq!(synthetic.len(), 8);
    for topic in &synthetic {
        assert!(
            topic.name.starts_with("Thermodynamics — "),
            "unexpected name: {}",
            topic.name
        );
        assert_eq!(topic.difficulty, Difficulty::Hard);
        assert_eq!(topic.priority, "high");
    }
}

#[tokio::test]
async fn test_single_topic_plan_schedules_synthetic_topics() {
    let state = AppState::new();
    let expander = TopicExpander::Static;
    let exam_date = Local::now().date_naive() + Duration::days(14);

    let plan = generate_study_plan(&state, &expander, exam_date, 2, "Thermodynamics | medium")
        .await
        .expect("plan should build");

    let study_topics: std::collections::BTreeSet<&str> = plan
        .iter()
        .flat_map(|d| &d.sessions)
        .filter(|s| s.kind == SessionKind::Study)
        .map(|s| s.topic.as_str())
        .collect();

    assert!(
        study_topics.len() >= 6,
        "expected at least 6 synthetic topics, got {}",
        study_topics.len()
    );
    for name in &study_topics {
        assert!(
            name.starts_with("Thermodynamics — "),
            "unexpected study topic: {}",
            name
        );
    }
}

#[tokio::test]
async fn test_multi_topic_input_is_not_expanded() {
    let state = AppState::new();
    let expander = TopicExpander::Static;
    let exam_date = Local::now().date_naive() + Duration::days(7);

    let plan = generate_study_plan(
        &state,
        &expander,
        exam_date,
        2,
        "Algebra | easy\nCalculus | hard",
    )
    .await
    .expect("plan should build");

    let study_topics: std::collections::BTreeSet<&str> = plan
        .iter()
        .flat_map(|d| &d.sessions)
        .filter(|s| s.kind == SessionKind::Study)
        .map(|s| s.topic.as_str())
        .collect();

    assert!(study_topics.contains("Algebra"));
    assert!(study_topics.contains("Calculus"));
    assert_eq!(state.get_expander_metrics().fallback_count, 0);
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let state = AppState::new();
    let expander = TopicExpander::Static;
    let exam_date = Local::now().date_naive() + Duration::days(7);

    let result = generate_study_plan(&state, &expander, exam_date, 2, "  \n \n").await;
    assert!(matches!(result, Err(examplan::PlanError::EmptyInput)));
}
