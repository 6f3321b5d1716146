use crate::planner::profiles::Difficulty;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIORITY: &str = "high";

/// One parsed topic line. Never mutated after parse.
///
/// `priority` is carried for external consumers; the scheduler itself does
/// not read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Topic {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Topic {
            name: name.into(),
            difficulty,
            priority: default_priority(),
        }
    }
}

/// Parse topic input, one topic per line.
///
/// Format: `name [| difficulty [| priority]]`. Blank lines are skipped;
/// duplicates by name are preserved in input order. A line with `|` but an
/// empty name segment still yields a Topic with an empty name; that is a
/// caller error, not validated here.
pub fn parse_topics(raw_text: &str) -> Vec<Topic> {
    let mut topics = Vec::new();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('|').map(str::trim).collect();

        let name = parts[0].to_string();

        let difficulty = parts
            .get(1)
            .filter(|s| !s.is_empty())
            .map(|s| Difficulty::parse(s))
            .unwrap_or(Difficulty::Medium);

        let priority = parts
            .get(2)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(default_priority);

        topics.push(Topic {
            name,
            difficulty,
            priority,
        });
    }

    topics
}

/// Returns true when only one topic was provided (triggers expansion).
pub fn is_single_topic(topics: &[Topic]) -> bool {
    topics.len() == 1
}
