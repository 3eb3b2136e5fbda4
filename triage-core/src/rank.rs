//! Batch ranking: score every task, stable-sort descending, pick top-K.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use crate::explain::explanation;
use crate::scoring::score;
use crate::task::Task;

/// Number of suggestions returned when the caller does not ask otherwise.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// A task annotated with its computed score. Serializes with the task's
/// own fields flattened, so callers get back the record they sent in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: i64,
}

/// A suggested task: scored, plus a short rationale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub task: Task,
    pub score: i64,
    pub explanation: String,
}

/// Score every task independently and return annotated copies ordered by
/// score descending. The sort is stable: equal scores keep input order.
/// The caller's tasks are not mutated.
pub fn rank(tasks: &[Task], today: NaiveDate) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|t| ScoredTask {
            task: t.clone(),
            score: score(t, today),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Top-`k` prefix of [`rank`], each entry carrying a rationale.
///
/// Returns fewer than `k` when the input is smaller; an empty input yields
/// an empty output, not an error.
pub fn suggest_top(tasks: &[Task], k: usize, today: NaiveDate) -> Vec<Suggestion> {
    rank(tasks, today)
        .into_iter()
        .take(k)
        .map(|st| {
            let explanation = explanation(st.score, &st.task);
            Suggestion {
                task: st.task,
                score: st.score,
                explanation,
            }
        })
        .collect()
}

/// Alternate orderings over an analyzed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Score descending; the engine's own order.
    Smart,
    /// Least effort first.
    Fastest,
    /// Importance descending.
    Impact,
    /// Earliest due date first.
    Deadline,
}

/// Re-order a batch produced by [`rank`]. Every strategy is stable over
/// the score-descending order, so score remains the tie-breaker.
pub fn apply_sort(scored: &mut [ScoredTask], strategy: SortStrategy, today: NaiveDate) {
    match strategy {
        SortStrategy::Smart => {}
        SortStrategy::Fastest => scored.sort_by(|a, b| {
            a.task
                .estimated_hours_or_default()
                .partial_cmp(&b.task.estimated_hours_or_default())
                .unwrap_or(Ordering::Equal)
        }),
        SortStrategy::Impact => scored.sort_by(|a, b| {
            b.task
                .importance_or_default()
                .cmp(&a.task.importance_or_default())
        }),
        SortStrategy::Deadline => {
            scored.sort_by_key(|st| st.task.resolved_due_date(today));
        }
    }
}
