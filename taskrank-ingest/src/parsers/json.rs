//! JSON task and feedback arrays.
//!
//! Tasks: `[{"id": "a", "title": "...", "importance": 7, "estimated_hours": 2,
//! "due_date": "2026-10-21", "dependencies": ["b"]}, ...]`
//!
//! Feedback: `[{"id": "a", "helpful": true}, ...]`

use anyhow::{Context, Result, bail};
use taskrank_core::{Feedback, Task};

use crate::types::RawTask;
use crate::validate::validate_tasks;

pub fn parse_tasks_json(text: &str) -> Result<Vec<Task>> {
    let raw: Vec<RawTask> = serde_json::from_str(text).context("expected a JSON array of tasks")?;
    validate_tasks(raw)
}

pub fn parse_feedback_json(text: &str) -> Result<Vec<Feedback>> {
    let feedback: Vec<Feedback> =
        serde_json::from_str(text).context("expected a JSON array of {id, helpful}")?;

    if let Some(pos) = feedback.iter().position(|f| f.id.trim().is_empty()) {
        bail!("feedback entry {} has an empty id", pos + 1);
    }

    Ok(feedback)
}
