//! Record validation: the gate between raw input and the scoring engine.

use anyhow::{Result, bail};
use taskrank_core::Task;

use crate::types::RawTask;

/// Check every record and convert the batch, or fail listing each problem.
///
/// Dependencies are not checked against the batch; unknown ids are allowed.
pub fn validate_tasks(raw: Vec<RawTask>) -> Result<Vec<Task>> {
    let mut problems: Vec<String> = Vec::new();
    let mut tasks = Vec::with_capacity(raw.len());

    for (i, r) in raw.into_iter().enumerate() {
        let label = match r.id.as_deref() {
            Some(id) if !id.trim().is_empty() => format!("record {} ({id})", i + 1),
            _ => format!("record {}", i + 1),
        };
        let before = problems.len();

        let id = r.id.map(|s| s.trim().to_string()).unwrap_or_default();
        if id.is_empty() {
            problems.push(format!("{label}: missing id"));
        }

        let title = r.title.unwrap_or_default();
        if title.trim().is_empty() {
            problems.push(format!("{label}: missing title"));
        }

        let importance = match r.importance {
            None => {
                problems.push(format!("{label}: missing importance"));
                0
            }
            Some(v) if !(1..=10).contains(&v) => {
                problems.push(format!("{label}: importance {v} outside 1..=10"));
                0
            }
            Some(v) => v as i32,
        };

        if let Some(h) = r.estimated_hours {
            if !h.is_finite() || h < 0.0 {
                problems.push(format!("{label}: estimated_hours must be a non-negative number"));
            }
        }

        if problems.len() == before {
            tasks.push(Task {
                id,
                title,
                importance,
                estimated_hours: r.estimated_hours,
                due_date: r.due_date,
                dependencies: r
                    .dependencies
                    .unwrap_or_default()
                    .into_iter()
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .collect(),
            });
        }
    }

    if !problems.is_empty() {
        bail!("invalid task input:\n  {}", problems.join("\n  "));
    }

    Ok(tasks)
}
