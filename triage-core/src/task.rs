//! Task model and attribute normalization for the triage engine.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Importance assumed when a task does not declare one.
pub const DEFAULT_IMPORTANCE: i64 = 5;
/// Effort estimate assumed when a task does not declare one.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Due date as it arrives on the wire: a parsed ISO calendar date, or raw
/// text that did not parse as `YYYY-MM-DD`.
///
/// No timezone: this is a calendar date, not a timestamp. Text that never
/// parses resolves to "today" at scoring time rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDate {
    Date(NaiveDate),
    Text(String),
}

impl DueDate {
    /// Resolve to a concrete date, falling back to `today` when the text
    /// form does not parse.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DueDate::Date(d) => *d,
            DueDate::Text(s) => NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).unwrap_or(today),
        }
    }
}

/// One unit of work to be scored.
///
/// The wire shape mirrors what embedding applications persist: `title`,
/// `due_date` as an ISO date string, `importance`, `estimated_hours`,
/// `dependencies`. Every field except the title is optional, and a field
/// of the wrong JSON type decodes as absent instead of failing the batch;
/// defaults are applied at scoring time, not at decode time, so the record
/// echoes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub title: String,

    #[serde(
        default,
        deserialize_with = "de_due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DueDate>,

    /// 1-10, higher matters more. Range is nominal, not enforced.
    #[serde(
        default,
        deserialize_with = "de_importance",
        skip_serializing_if = "Option::is_none"
    )]
    pub importance: Option<i64>,

    #[serde(
        default,
        deserialize_with = "de_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_hours: Option<f64>,

    /// Ids of tasks this one depends on. Carried through, never scored.
    #[serde(default, deserialize_with = "de_dependencies")]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: None,
            importance: None,
            estimated_hours: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(DueDate::Date(due));
        self
    }

    /// Raw textual due date, kept as-is until scoring resolves it.
    pub fn with_due_text(mut self, text: impl Into<String>) -> Self {
        self.due_date = Some(DueDate::Text(text.into()));
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_dependencies(mut self, ids: Vec<String>) -> Self {
        self.dependencies = ids;
        self
    }

    pub fn importance_or_default(&self) -> i64 {
        self.importance.unwrap_or(DEFAULT_IMPORTANCE)
    }

    pub fn estimated_hours_or_default(&self) -> f64 {
        self.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS)
    }

    /// Concrete due date for scoring. Absent and unparseable both resolve
    /// to `today` (zero days until due).
    pub fn resolved_due_date(&self, today: NaiveDate) -> NaiveDate {
        match &self.due_date {
            Some(due) => due.resolve(today),
            None => today,
        }
    }

    /// Signed whole days from `today` to the resolved due date. Negative
    /// means overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.resolved_due_date(today) - today).num_days()
    }
}

// Lenient field decoders: a value of the wrong shape is treated as absent,
// so one bad field never rejects the whole batch. Only the container shape
// is checked strictly, and that happens at the boundary.

fn de_due_date<'de, D>(deserializer: D) -> Result<Option<DueDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Date(NaiveDate),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Date(d)) => Some(DueDate::Date(d)),
        Some(Wire::Text(s)) => Some(DueDate::Text(s)),
        _ => None,
    })
}

fn de_importance<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Int(i64),
        Other(IgnoredAny),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Int(n)) => Some(n),
        _ => None,
    })
}

fn de_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Num(f64),
        Other(IgnoredAny),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Num(h)) => Some(h),
        _ => None,
    })
}

fn de_dependencies<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Ids are opaque; stores hand them over as strings or integers.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Text(String),
        Int(i64),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        List(Vec<WireId>),
        Other(IgnoredAny),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::List(ids)) => ids
            .into_iter()
            .map(|id| match id {
                WireId::Text(s) => s,
                WireId::Int(n) => n.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}
