//! End-to-end pipeline over a realistic batch: decode -> rank -> suggest.

use chrono::NaiveDate;
use triage_core::{rank, suggest_top, PriorityTier, Task};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn sample_batch() -> Vec<Task> {
    let json = r#"[
        {
            "title": "Fix critical login bug",
            "due_date": "2026-03-09",
            "estimated_hours": 4,
            "importance": 10,
            "dependencies": []
        },
        {
            "title": "Update documentation",
            "due_date": "2026-03-15",
            "estimated_hours": 1,
            "importance": 4,
            "dependencies": []
        },
        {
            "title": "Refactor database schema",
            "due_date": "2026-03-12",
            "estimated_hours": 8,
            "importance": 9,
            "dependencies": []
        },
        {
            "title": "Email team updates",
            "due_date": "2026-03-10",
            "estimated_hours": 0.5,
            "importance": 6,
            "dependencies": []
        }
    ]"#;
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_rank_orders_sample_batch() {
    let ranked = rank(&sample_batch(), today());

    let got: Vec<(&str, i64)> = ranked
        .iter()
        .map(|s| (s.task.title.as_str(), s.score))
        .collect();

    assert_eq!(
        got,
        vec![
            ("Fix critical login bug", 150),  // 100 overdue + 50
            ("Refactor database schema", 95), // 50 due soon + 45
            ("Email team updates", 90),       // 50 + 30 + 10 quick win
            ("Update documentation", 50),     // 20 this week + 20 + 10
        ]
    );
}

#[test]
fn test_suggest_top_three_with_explanations() {
    let suggestions = suggest_top(&sample_batch(), 3, today());

    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].task.title, "Fix critical login bug");
    assert_eq!(suggestions[0].explanation, "Urgent! Overdue. High importance.");
    assert_eq!(suggestions[1].task.title, "Refactor database schema");
    assert_eq!(suggestions[1].explanation, "Due very soon. High importance.");
    assert_eq!(suggestions[2].task.title, "Email team updates");
    assert_eq!(suggestions[2].explanation, "Due very soon. Quick win.");
}

#[test]
fn test_suggestion_json_carries_the_input_record() {
    let suggestions = suggest_top(&sample_batch(), 1, today());
    let json = serde_json::to_value(&suggestions[0]).unwrap();

    assert_eq!(json["title"], "Fix critical login bug");
    assert_eq!(json["due_date"], "2026-03-09");
    assert_eq!(json["importance"], 10);
    assert_eq!(json["score"], 150);
    assert_eq!(json["explanation"], "Urgent! Overdue. High importance.");
}

#[test]
fn test_tiers_for_sample_batch() {
    let ranked = rank(&sample_batch(), today());
    let tiers: Vec<PriorityTier> = ranked
        .iter()
        .map(|s| PriorityTier::classify(s.score))
        .collect();

    assert_eq!(
        tiers,
        vec![
            PriorityTier::High,
            PriorityTier::Medium,
            PriorityTier::Medium,
            PriorityTier::Medium,
        ]
    );
}

#[test]
fn test_batch_with_degenerate_records_still_ranks() {
    // Bad date text, missing fields, wrong-typed importance: every record
    // degrades to defaults instead of failing the batch.
    let json = r#"[
        {"title": "garbled", "due_date": "soonish", "importance": 5, "estimated_hours": 3},
        {"title": "bare"},
        {"title": "typed wrong", "importance": "very", "estimated_hours": 3}
    ]"#;
    let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
    let ranked = rank(&tasks, today());

    assert_eq!(ranked.len(), 3);
    // All resolve to due today: 50 + 25 (+10 quick win for the bare one).
    assert_eq!(ranked[0].task.title, "bare");
    assert_eq!(ranked[0].score, 85);
    assert_eq!(ranked[1].score, 75);
    assert_eq!(ranked[2].score, 75);
    // Equal scores keep input order.
    assert_eq!(ranked[1].task.title, "garbled");
    assert_eq!(ranked[2].task.title, "typed wrong");
}
