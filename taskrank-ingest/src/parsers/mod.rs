//! File loaders. Each returns validated core types.

pub mod delimited;
pub mod json;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use taskrank_core::{Feedback, Task};

use crate::types::InputFormat;

pub use delimited::parse_tasks_csv;
pub use json::{parse_feedback_json, parse_tasks_json};

/// Load and validate a task batch, picking the format from the extension.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    let tasks = match InputFormat::from_path(path) {
        InputFormat::Csv => parse_tasks_csv(text.as_bytes()),
        InputFormat::Json => parse_tasks_json(&text),
    };
    tasks.with_context(|| format!("parsing {}", path.display()))
}

pub fn load_feedback(path: impl AsRef<Path>) -> Result<Vec<Feedback>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_feedback_json(&text).with_context(|| format!("parsing {}", path.display()))
}
