//! triage-core: priority scoring and ranking for task triage.
//!
//! The pipeline is a straight line: task attributes -> score -> ranked
//! batch -> optional top-K suggestions with a human-readable rationale.
//! Scoring is pure; "today" is always passed in by the caller.

pub mod explain;
pub mod rank;
pub mod scoring;
pub mod task;

pub use explain::{explanation, PriorityTier, HIGH_IMPORTANCE_MIN};
pub use rank::{
    apply_sort, rank, suggest_top, ScoredTask, SortStrategy, Suggestion, DEFAULT_SUGGESTION_COUNT,
};
pub use scoring::{score, UrgencyBand};
pub use task::{DueDate, Task};
