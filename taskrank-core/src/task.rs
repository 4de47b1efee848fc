//! Task model consumed by the priority engine.
//!
//! Records arrive already validated (see `taskrank-ingest`); the core never
//! probes for missing fields beyond the explicit `Option`s below.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unit of work in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within a batch; used as the graph node key.
    pub id: String,

    /// Display only, never scored.
    pub title: String,

    /// 1-10. Missing is treated as 0.
    #[serde(default)]
    pub importance: i32,

    /// Hours of work. `None` means the effort is unknown.
    #[serde(default)]
    pub estimated_hours: Option<f64>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Ids this task depends on, in declared order. May name tasks outside the batch.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            importance: 0,
            estimated_hours: None,
            due_date: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn depends_on(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }
}

/// A single helpful / not-helpful vote on a ranked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub helpful: bool,
}

impl Feedback {
    pub fn new(id: impl Into<String>, helpful: bool) -> Self {
        Self {
            id: id.into(),
            helpful,
        }
    }
}
