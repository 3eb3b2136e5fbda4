//! Priority scorer: additive urgency + importance + effort point system.
//!
//! One task in, one integer out. The function is pure and total: malformed
//! or missing fields fall back to their documented defaults, and "today"
//! is always an explicit argument so callers (and tests) pin the date.

use chrono::NaiveDate;

use crate::task::Task;

/// Points for a task whose due date is already past.
pub const OVERDUE_POINTS: i64 = 100;
/// Points for a task due within [`DUE_SOON_DAYS`] days.
pub const DUE_SOON_POINTS: i64 = 50;
/// Points for a task due within [`DUE_THIS_WEEK_DAYS`] days.
pub const DUE_THIS_WEEK_POINTS: i64 = 20;
/// Multiplier applied to the 1-10 importance value.
pub const IMPORTANCE_WEIGHT: i64 = 5;
/// Bonus for tasks estimated under [`QUICK_WIN_MAX_HOURS`].
pub const QUICK_WIN_POINTS: i64 = 10;

pub const DUE_SOON_DAYS: i64 = 3;
pub const DUE_THIS_WEEK_DAYS: i64 = 7;
pub const QUICK_WIN_MAX_HOURS: f64 = 2.0;

/// Urgency band from days remaining until the due date. Bands are
/// mutually exclusive; exactly one applies to any task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBand {
    /// Due date already past.
    Overdue,
    /// Due within 3 days.
    DueSoon,
    /// Due within a week.
    DueThisWeek,
    /// More than a week out.
    NotUrgent,
}

impl UrgencyBand {
    /// Classify signed days-until-due (negative means overdue).
    pub fn classify(days_until_due: i64) -> Self {
        if days_until_due < 0 {
            UrgencyBand::Overdue
        } else if days_until_due <= DUE_SOON_DAYS {
            UrgencyBand::DueSoon
        } else if days_until_due <= DUE_THIS_WEEK_DAYS {
            UrgencyBand::DueThisWeek
        } else {
            UrgencyBand::NotUrgent
        }
    }

    pub fn points(self) -> i64 {
        match self {
            UrgencyBand::Overdue => OVERDUE_POINTS,
            UrgencyBand::DueSoon => DUE_SOON_POINTS,
            UrgencyBand::DueThisWeek => DUE_THIS_WEEK_POINTS,
            UrgencyBand::NotUrgent => 0,
        }
    }
}

/// Score one task against `today`. Higher = more urgent/important.
///
/// Contributions are independent and cumulative:
/// 1. urgency band points from days-until-due
/// 2. importance x [`IMPORTANCE_WEIGHT`]
/// 3. quick-win bonus when the estimate is under [`QUICK_WIN_MAX_HOURS`]
///
/// Declared dependencies contribute nothing: a task is scored from its own
/// fields only, without the rest of the batch. Reasoning about what a task
/// blocks would need the full task set, which the scorer does not receive.
pub fn score(task: &Task, today: NaiveDate) -> i64 {
    let mut score = UrgencyBand::classify(task.days_until_due(today)).points();

    score += task.importance_or_default() * IMPORTANCE_WEIGHT;

    if task.estimated_hours_or_default() < QUICK_WIN_MAX_HOURS {
        score += QUICK_WIN_POINTS;
    }

    score
}
