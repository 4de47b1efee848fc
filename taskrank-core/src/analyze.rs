//! Batch pipeline: graph + cycles once, then score and explain every task,
//! then a stable descending sort by score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::calendar::BusinessCalendar;
use crate::cycles::detect_cycles;
use crate::explain::build_explanation;
use crate::graph::DependencyGraph;
use crate::mode::ScoringMode;
use crate::scoring::{PriorityBand, Quadrant, ScoringContext, compute_priority};
use crate::task::{Feedback, Task};
use crate::weights::{AdaptiveWeights, FeedbackOutcome, Weights};

/// How many tasks `suggest` returns.
pub const DEFAULT_SUGGEST_LIMIT: usize = 3;

/// A task with its ranking attached. Serializes flat: original fields first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: f64,
    pub priority_band: PriorityBand,
    pub quadrant: Quadrant,
    pub importance_label: String,
    pub urgency_label: String,
    pub effort_label: String,
    pub dependency_label: String,
    pub in_cycle: bool,
    pub explanation: String,
}

/// Owns the calendar and a handle to the shared adaptive weights.
///
/// Cloning is cheap and every clone sees the same weights.
#[derive(Debug, Clone, Default)]
pub struct PriorityEngine {
    calendar: BusinessCalendar,
    weights: Arc<AdaptiveWeights>,
}

impl PriorityEngine {
    pub fn new(calendar: BusinessCalendar, weights: Arc<AdaptiveWeights>) -> Self {
        Self { calendar, weights }
    }

    pub fn with_initial_weights(calendar: BusinessCalendar, initial: Weights) -> Self {
        Self::new(calendar, Arc::new(AdaptiveWeights::new(initial)))
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    pub fn weights(&self) -> Weights {
        self.weights.snapshot()
    }

    /// Score, explain and sort a batch. An empty batch yields an empty result.
    pub fn analyze(&self, tasks: &[Task], mode: ScoringMode, today: NaiveDate) -> Vec<AnalyzedTask> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let graph = DependencyGraph::build(tasks);
        let cycles = detect_cycles(tasks);
        let ctx = ScoringContext {
            graph: &graph,
            calendar: &self.calendar,
            mode,
            weights: self.weights.snapshot(),
            today,
        };

        tracing::debug!(
            tasks = tasks.len(),
            edges = graph.reverse_edge_count(),
            cycles = cycles.len(),
            %mode,
            "analyzing batch"
        );

        let mut out: Vec<AnalyzedTask> = tasks
            .iter()
            .map(|task| {
                let info = compute_priority(task, &ctx);
                let in_cycle = cycles.contains(&task.id);
                let explanation = build_explanation(&info, in_cycle, info.unblocks);

                AnalyzedTask {
                    task: task.clone(),
                    score: info.score,
                    priority_band: info.priority_band,
                    quadrant: info.quadrant,
                    importance_label: info.importance_label,
                    urgency_label: info.urgency_label,
                    effort_label: info.effort_label,
                    dependency_label: info.dependency_label,
                    in_cycle,
                    explanation,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep input order.
        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out
    }

    /// The first `limit` entries of [`analyze`](Self::analyze).
    pub fn suggest(
        &self,
        tasks: &[Task],
        mode: ScoringMode,
        today: NaiveDate,
        limit: usize,
    ) -> Vec<AnalyzedTask> {
        let mut ranked = self.analyze(tasks, mode, today);
        ranked.truncate(limit);
        ranked
    }

    pub fn apply_feedback(&self, mode: ScoringMode, feedback: &[Feedback]) -> FeedbackOutcome {
        self.weights.apply_feedback(mode, feedback)
    }
}
