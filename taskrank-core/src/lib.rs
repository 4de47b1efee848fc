//! taskrank-core: priority scoring engine for task batches
//!
//! Builds the dependency graph and cycle set once per batch, scores each task
//! under a weighting mode, explains the result, and sorts by score.

pub mod analyze;
pub mod calendar;
pub mod classify;
pub mod cycles;
pub mod explain;
pub mod graph;
pub mod mode;
pub mod scoring;
pub mod task;
pub mod weights;

pub use analyze::{AnalyzedTask, DEFAULT_SUGGEST_LIMIT, PriorityEngine};
pub use calendar::{BusinessCalendar, calendar_days_until};
pub use classify::{Effort, Fanout, ImportanceLevel, Urgency};
pub use cycles::detect_cycles;
pub use explain::build_explanation;
pub use graph::DependencyGraph;
pub use mode::ScoringMode;
pub use scoring::{FactorScores, PriorityBand, Quadrant, ScoreInfo, ScoringContext, compute_priority};
pub use task::{Feedback, Task};
pub use weights::{AdaptiveWeights, FeedbackOutcome, FeedbackStatus, Weights};
