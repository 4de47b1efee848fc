use chrono::{Days, NaiveDate};
use taskrank_core::{
    BusinessCalendar, DependencyGraph, Feedback, PriorityEngine, Quadrant, ScoringMode, Task,
    Weights, detect_cycles,
};

fn today() -> NaiveDate {
    // Monday
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn two_task_batch() -> Vec<Task> {
    vec![
        Task::new("A", "Ship hotfix")
            .with_importance(9)
            .with_due_date(today())
            .with_hours(1.0),
        Task::new("B", "Refactor billing")
            .with_importance(2)
            .with_due_date(today() + Days::new(20))
            .with_hours(10.0)
            .depends_on("A"),
    ]
}

#[test]
fn urgent_important_task_ranks_first() {
    let engine = PriorityEngine::default();
    let out = engine.analyze(&two_task_batch(), ScoringMode::SmartBalance, today());

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].task.id, "A");
    assert_eq!(out[1].task.id, "B");

    assert_eq!(out[0].quadrant, Quadrant::DoFirst);
    assert_eq!(out[0].dependency_label, "Unblocks 1 task(s)");
    assert_eq!(out[1].dependency_label, "No blockers");

    // 30*1.0 + 30*0.8 + 12*0.6 + 6*1.2
    assert_eq!(out[0].score, 68.4);
    // 8*1.0 + 5*0.8 - 8*0.6
    assert_eq!(out[1].score, 7.2);
    assert_eq!(out[1].urgency_label, "Upcoming deadline");
    assert_eq!(out[1].effort_label, "Large effort task");

    assert_eq!(
        out[0].explanation,
        "Critical importance; Due today; Quick win (low effort); Unblocks 1 task(s); \
         Unblocks 1 downstream task(s); Eisenhower zone: Do First (Urgent & Important); \
         Final score: 68.4"
    );
}

#[test]
fn suggest_with_two_tasks_returns_two() {
    let engine = PriorityEngine::default();
    let out = engine.suggest(&two_task_batch(), ScoringMode::SmartBalance, today(), 3);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].task.id, "A");
}

#[test]
fn suggest_caps_at_limit() {
    let engine = PriorityEngine::default();
    let tasks: Vec<Task> = (1..=6)
        .map(|i| Task::new(format!("t{i}"), "x").with_importance(i))
        .collect();
    let out = engine.suggest(&tasks, ScoringMode::HighImpact, today(), 3);
    assert_eq!(out.len(), 3);
    assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn dangling_dependency_counts_but_does_not_cycle() {
    let tasks = vec![Task::new("a", "x").depends_on("missing")];
    let graph = DependencyGraph::build(&tasks);
    assert_eq!(graph.unblocks_count("missing"), 1);
    assert!(detect_cycles(&tasks).is_empty());

    let out = PriorityEngine::default().analyze(&tasks, ScoringMode::SmartBalance, today());
    assert!(!out[0].in_cycle);
    assert_eq!(out[0].dependency_label, "No blockers");
}

#[test]
fn unknown_mode_scores_like_smart_balance() {
    let engine = PriorityEngine::default();
    let batch = two_task_batch();
    let fallback = engine.analyze(&batch, ScoringMode::from("not_a_mode"), today());
    let smart = engine.analyze(&batch, ScoringMode::SmartBalance, today());
    assert_eq!(fallback, smart);
}

#[test]
fn holidays_shift_urgency() {
    // Due Wednesday; Tuesday is a holiday, so only one business day remains.
    let due = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
    let holiday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let engine = PriorityEngine::with_initial_weights(
        BusinessCalendar::with_holidays([holiday]),
        Weights::default(),
    );
    let tasks = vec![Task::new("a", "x").with_importance(3).with_due_date(due)];
    let out = engine.analyze(&tasks, ScoringMode::DeadlineDriven, today());
    assert_eq!(out[0].urgency_label, "Due very soon");
    assert_eq!(out[0].quadrant, Quadrant::Delegate);
}

#[test]
fn feedback_in_other_modes_leaves_weights_alone() {
    let engine = PriorityEngine::default();
    let votes = vec![Feedback::new("A", true), Feedback::new("B", true)];
    for mode in [
        ScoringMode::HighImpact,
        ScoringMode::FastestWins,
        ScoringMode::DeadlineDriven,
    ] {
        engine.apply_feedback(mode, &votes);
    }
    assert_eq!(engine.weights(), Weights::default());
}

#[test]
fn three_helpful_one_unhelpful_raises_importance_by_step() {
    let engine = PriorityEngine::default();
    let before = engine.weights();
    let votes = vec![
        Feedback::new("A", true),
        Feedback::new("B", true),
        Feedback::new("C", true),
        Feedback::new("D", false),
    ];
    let out = engine.apply_feedback(ScoringMode::SmartBalance, &votes);
    assert!((out.weights.importance - (before.importance + 0.05)).abs() < 1e-9);
    assert_eq!(out.weights.urgency, before.urgency);
    assert_eq!(engine.weights(), out.weights);
}
