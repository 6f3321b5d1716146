//! Exam study planner core.
//!
//! The algorithmic heart is [`planner::schedule::build_schedule`]: a pure,
//! deterministic scheduler that turns difficulty-weighted topics, a daily
//! time budget, and an exam date into a day-by-day session plan. Around it
//! sits a thin orchestration layer ([`planner::generate_study_plan`]) and
//! the topic-expansion capability, which may call a hosted chat model but
//! always degrades to a deterministic offline fallback.

pub mod cache;
pub mod circuit_breaker;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipelines;
pub mod planner;
pub mod state;

pub use error::PlanError;
pub use planner::expander::TopicExpander;
pub use planner::profiles::Difficulty;
pub use planner::schedule::{build_schedule, build_schedule_from, DayPlan, Session, SessionKind};
pub use planner::topics::{parse_topics, Topic};
pub use planner::{expand_topic, generate_study_plan};
pub use state::app::AppState;
