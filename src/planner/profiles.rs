use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a topic.
///
/// Parsing is total: any unrecognized label resolves to `Medium`, at every
/// site that touches a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pedagogical profile for a difficulty tier.
///
/// `weight` drives the scheduler's time allocation; the remaining fields
/// are consumed only by the topic-expansion prompt.
#[derive(Debug)]
pub struct DifficultyProfile {
    pub weight: f32,
    pub depth: &'static str,
    pub revision_cycles: u8,
    pub practice_type: &'static str,
    pub focus: &'static [&'static str],
    pub notes: &'static str,
    pub prompt_hint: &'static str,
}

static EASY: DifficultyProfile = DifficultyProfile {
    weight: 1.0,
    depth: "basic understanding",
    revision_cycles: 1,
    practice_type: "simple questions",
    focus: &["definitions", "basic concepts", "examples"],
    notes: "Focus on understanding fundamentals.",
    prompt_hint: "Use simple language. Avoid formulas. \
        Focus on intuition, examples, and basic understanding.",
};

static MEDIUM: DifficultyProfile = DifficultyProfile {
    weight: 1.5,
    depth: "conceptual + applied",
    revision_cycles: 2,
    practice_type: "mixed problems",
    focus: &["definitions", "mechanism", "process flow", "applications"],
    notes: "Balance theory and application.",
    prompt_hint: "Explain concepts clearly with working principles \
        and moderate technical depth.",
};

static HARD: DifficultyProfile = DifficultyProfile {
    weight: 2.2,
    depth: "advanced mastery",
    revision_cycles: 3,
    practice_type: "advanced problems",
    focus: &[
        "internal mechanisms",
        "derivations",
        "edge cases",
        "limitations",
        "design reasoning",
    ],
    notes: "Focus on deep reasoning, analytical understanding, \
        and exam-level problem solving.",
    prompt_hint: "Explain in depth using mechanisms, reasoning, \
        step-by-step processes, limitations, and exam-oriented insight.",
};

/// Returns the pedagogical profile for a difficulty tier.
pub fn profile(level: Difficulty) -> &'static DifficultyProfile {
    match level {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    }
}

/// Relative time-allocation multiplier.
pub fn weight(level: Difficulty) -> f32 {
    profile(level).weight
}
