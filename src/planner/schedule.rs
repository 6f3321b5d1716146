use crate::error::PlanError;
use crate::planner::profiles::weight;
use crate::planner::topics::Topic;
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Atomic unit of scheduled study or revision time, in minutes.
pub const FOCUS_BLOCK: u32 = 30;
/// At most 60 minutes of one topic per day from the study rotation.
pub const MAX_BLOCKS_PER_TOPIC_PER_DAY: u32 = 2;

const PRACTICE_LABEL: &str = "Practice questions";
const MOCK_TEST_LABEL: &str = "Full syllabus mock test";
const FINAL_REVISION_LABEL: &str = "Light revision + rest";

/// Far enough in the past that the first day is never blocked.
const LAST_SEEN_SENTINEL: i64 = -10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Study,
    Revision,
    Practice,
    MockTest,
    FinalRevision,
}

/// One scheduled block. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub kind: SessionKind,
    pub topic: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
}

impl DayPlan {
    pub fn total_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.minutes).sum()
    }
}

/// Per-topic working state, owned by a single build call and discarded
/// when it returns.
struct TopicState {
    name: String,
    remaining: i64,
    /// Counts scheduled study blocks, not distinct days.
    exposure_days: u32,
    last_seen: i64,
}

/// Weighted share of the total budget, floored at two focus blocks.
///
/// The floor can push the summed allocations past `total_minutes`; that
/// over-allocation is deliberate and never renormalized.
fn initial_allocation(topic_weight: f32, total_weight: f32, total_minutes: i64) -> i64 {
    let share = topic_weight as f64 / total_weight as f64;
    ((share * total_minutes as f64).round() as i64).max((FOCUS_BLOCK * 2) as i64)
}

/// Build a schedule starting from today's local date.
pub fn build_schedule(
    topics: &[Topic],
    exam_date: NaiveDate,
    daily_hours: u32,
) -> Result<Vec<DayPlan>, PlanError> {
    build_schedule_from(Local::now().date_naive(), topics, exam_date, daily_hours)
}

/// Deterministic core: build a schedule with an explicit start date.
///
/// Every day from `today` through the day before the exam gets a DayPlan;
/// a mock-test day lands at `exam_date - 2` (when still in the future) and
/// a final-revision day at `exam_date - 1`. Trailing days are appended,
/// never merged, so the sorted plan may contain two entries for one date.
pub fn build_schedule_from(
    today: NaiveDate,
    topics: &[Topic],
    exam_date: NaiveDate,
    daily_hours: u32,
) -> Result<Vec<DayPlan>, PlanError> {
    if exam_date <= today {
        return Err(PlanError::InvalidDate { exam_date, today });
    }

    let minutes_per_day = daily_hours as i64 * 60;
    let total_days = (exam_date - today).num_days();
    let total_minutes = minutes_per_day * total_days;

    if total_minutes <= 0 {
        return Err(PlanError::InsufficientTime { total_minutes });
    }

    let total_weight: f32 = topics.iter().map(|t| weight(t.difficulty)).sum();

    let mut topic_pool: Vec<TopicState> = topics
        .iter()
        .map(|t| TopicState {
            name: t.name.clone(),
            remaining: initial_allocation(weight(t.difficulty), total_weight, total_minutes),
            exposure_days: 0,
            last_seen: LAST_SEEN_SENTINEL,
        })
        .collect();

    let mut schedule = Vec::new();
    let mut current_day = today;
    let mut day_index: i64 = 0;

    while current_day < exam_date {
        let mut minutes_left = minutes_per_day;
        let mut sessions = Vec::new();

        // Study rotation, fixed input order.
        for topic in &mut topic_pool {
            if minutes_left < FOCUS_BLOCK as i64 {
                break;
            }
            if topic.remaining <= 0 {
                continue;
            }
            // An already-exposed topic never runs two days in a row;
            // a never-studied topic is always eligible.
            if day_index - topic.last_seen <= 1 && topic.exposure_days >= 1 {
                continue;
            }

            let blocks_today = (MAX_BLOCKS_PER_TOPIC_PER_DAY as i64)
                .min(topic.remaining / FOCUS_BLOCK as i64);

            for _ in 0..blocks_today {
                if minutes_left < FOCUS_BLOCK as i64 {
                    break;
                }

                sessions.push(Session {
                    kind: SessionKind::Study,
                    topic: topic.name.clone(),
                    minutes: FOCUS_BLOCK,
                });

                topic.remaining -= FOCUS_BLOCK as i64;
                minutes_left -= FOCUS_BLOCK as i64;
                topic.last_seen = day_index;
                topic.exposure_days += 1;
            }
        }

        // Revision: rotate deterministically through already-exposed topics.
        let revision_candidates: Vec<usize> = topic_pool
            .iter()
            .enumerate()
            .filter(|(_, t)| t.exposure_days >= 1)
            .map(|(i, _)| i)
            .collect();

        if minutes_left >= FOCUS_BLOCK as i64 && !revision_candidates.is_empty() {
            let pick = revision_candidates[day_index as usize % revision_candidates.len()];
            sessions.push(Session {
                kind: SessionKind::Revision,
                topic: topic_pool[pick].name.clone(),
                minutes: FOCUS_BLOCK,
            });
            minutes_left -= FOCUS_BLOCK as i64;
        }

        // Practice sweeps up whatever is left of the day.
        if minutes_left >= FOCUS_BLOCK as i64 {
            sessions.push(Session {
                kind: SessionKind::Practice,
                topic: PRACTICE_LABEL.to_string(),
                minutes: minutes_left as u32,
            });
        }

        schedule.push(DayPlan {
            date: current_day,
            sessions,
        });

        current_day += Duration::days(1);
        day_index += 1;
    }

    let final_mock_day = exam_date - Duration::days(2);
    if final_mock_day > today {
        schedule.push(DayPlan {
            date: final_mock_day,
            sessions: vec![Session {
                kind: SessionKind::MockTest,
                topic: MOCK_TEST_LABEL.to_string(),
                minutes: minutes_per_day as u32,
            }],
        });
    }

    schedule.push(DayPlan {
        date: exam_date - Duration::days(1),
        sessions: vec![Session {
            kind: SessionKind::FinalRevision,
            topic: FINAL_REVISION_LABEL.to_string(),
            minutes: (minutes_per_day / 2).max(FOCUS_BLOCK as i64) as u32,
        }],
    });

    // Stable: entries sharing a date keep their insertion order.
    schedule.sort_by_key(|day| day.date);

    Ok(schedule)
}
