//! Human-readable rationale for scored tasks.
//!
//! Thresholds reuse the scorer's band constants, so the wording stays
//! numerically consistent with the points that produced the score.

use crate::scoring::{DUE_SOON_POINTS, OVERDUE_POINTS, QUICK_WIN_MAX_HOURS};
use crate::task::Task;

/// Importance at or above which a task is called out explicitly.
pub const HIGH_IMPORTANCE_MIN: i64 = 8;

const GENERAL_PRIORITY: &str = "General priority.";

/// Build the rationale for a task that scored `score`.
///
/// Phrases are evaluated in a fixed order and joined by single spaces.
/// The urgency phrases form a priority chain over the final score (at most
/// one of them appears); the rest look at the task's own attributes with
/// defaults applied.
pub fn explanation(score: i64, task: &Task) -> String {
    let mut phrases: Vec<&str> = Vec::new();

    if score >= OVERDUE_POINTS {
        phrases.push("Urgent! Overdue.");
    } else if score >= DUE_SOON_POINTS {
        phrases.push("Due very soon.");
    }

    if task.importance_or_default() >= HIGH_IMPORTANCE_MIN {
        phrases.push("High importance.");
    }

    if task.estimated_hours_or_default() < QUICK_WIN_MAX_HOURS {
        phrases.push("Quick win.");
    }

    if phrases.is_empty() {
        GENERAL_PRIORITY.to_string()
    } else {
        phrases.join(" ")
    }
}

/// Coarse display band over the final score, for human-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn classify(score: i64) -> Self {
        if score >= OVERDUE_POINTS {
            PriorityTier::High
        } else if score >= DUE_SOON_POINTS {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
            PriorityTier::Low => "low",
        }
    }
}
