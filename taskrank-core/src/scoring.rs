//! Scoring engine: blends the four classifier sub-scores into a final score,
//! then derives a priority band and an Eisenhower quadrant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::BusinessCalendar;
use crate::classify::{Effort, Fanout, ImportanceLevel, Urgency};
use crate::graph::DependencyGraph;
use crate::mode::ScoringMode;
use crate::task::Task;
use crate::weights::{Weights, round2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityBand {
    High,
    Medium,
    Low,
}

impl PriorityBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 65.0 => Self::High,
            s if s >= 35.0 => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Do First (Urgent & Important)")]
    DoFirst,
    #[serde(rename = "Schedule (Important, Not Urgent)")]
    Schedule,
    #[serde(rename = "Delegate (Urgent, Not Important)")]
    Delegate,
    #[serde(rename = "Eliminate (Not Urgent, Not Important)")]
    Eliminate,
}

impl Quadrant {
    /// Urgent: due within 2 business days (or overdue). Important: importance >= 7.
    pub fn place(business_days: Option<i64>, importance: i32) -> Self {
        let urgent = business_days.is_some_and(|d| d <= 2);
        let important = importance >= 7;
        match (urgent, important) {
            (true, true) => Self::DoFirst,
            (false, true) => Self::Schedule,
            (true, false) => Self::Delegate,
            (false, false) => Self::Eliminate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DoFirst => "Do First (Urgent & Important)",
            Self::Schedule => "Schedule (Important, Not Urgent)",
            Self::Delegate => "Delegate (Urgent, Not Important)",
            Self::Eliminate => "Eliminate (Not Urgent, Not Important)",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw sub-scores before blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub importance: f64,
    pub urgency: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl FactorScores {
    /// Weighted sum for `mode`. `weights` is read only in the adaptive mode.
    pub fn blend(&self, mode: ScoringMode, weights: &Weights) -> f64 {
        match mode {
            ScoringMode::FastestWins => {
                self.effort * 2.0 + self.importance * 0.7 + self.urgency * 0.3 + self.dependency * 0.5
            }
            ScoringMode::HighImpact => {
                self.importance * 2.0 + self.urgency * 1.0 + self.dependency * 0.8 + self.effort * 0.2
            }
            ScoringMode::DeadlineDriven => {
                self.urgency * 2.0 + self.importance * 1.0 + self.dependency * 0.7 + self.effort * 0.3
            }
            ScoringMode::SmartBalance => {
                self.importance * weights.importance
                    + self.urgency * weights.urgency
                    + self.effort * weights.effort
                    + self.dependency * weights.dependency
            }
        }
    }
}

/// Per-task scoring result. Ephemeral, recomputed on every batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInfo {
    pub score: f64,
    pub priority_band: PriorityBand,
    pub quadrant: Quadrant,
    pub importance_label: String,
    pub urgency_label: String,
    pub effort_label: String,
    pub dependency_label: String,
    /// Signed business days until due.
    pub business_days: Option<i64>,
    pub unblocks: usize,
}

/// Shared inputs for scoring every task in one batch.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub graph: &'a DependencyGraph,
    pub calendar: &'a BusinessCalendar,
    pub mode: ScoringMode,
    /// Snapshot of the adaptive weights taken once per batch.
    pub weights: Weights,
    pub today: NaiveDate,
}

pub fn compute_priority(task: &Task, ctx: &ScoringContext<'_>) -> ScoreInfo {
    let importance = ImportanceLevel::classify(task.importance);
    let business_days = ctx.calendar.business_days_until(task.due_date, ctx.today);
    let urgency = Urgency::classify(business_days);
    let effort = Effort::classify(task.estimated_hours);
    let fanout = Fanout(ctx.graph.unblocks_count(&task.id));

    let factors = FactorScores {
        importance: importance.score(),
        urgency: urgency.score(),
        effort: effort.score(),
        dependency: fanout.score(),
    };

    let score = round2(factors.blend(ctx.mode, &ctx.weights).max(0.0));

    ScoreInfo {
        score,
        priority_band: PriorityBand::from_score(score),
        quadrant: Quadrant::place(business_days, task.importance),
        importance_label: importance.label().to_string(),
        urgency_label: urgency.label().to_string(),
        effort_label: effort.label().to_string(),
        dependency_label: fanout.to_string(),
        business_days,
        unblocks: fanout.0,
    }
}
