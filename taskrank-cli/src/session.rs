//! Line-oriented session: one JSON request per stdin line, one JSON response
//! per stdout line. All requests share one engine, so feedback applied during
//! the session affects later `smart_balance` rankings.
//!
//! Requests:
//!   {"op": "analyze", "tasks": [...], "mode": "high_impact", "today": "2026-10-19"}
//!   {"op": "suggest", "tasks": [...], "limit": 3}
//!   {"op": "feedback", "mode": "smart_balance", "feedback": [{"id": "a", "helpful": true}]}
//!   {"op": "weights"}
//!
//! Responses: {"ok": true, "result": ...} or {"ok": false, "error": "..."}.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use taskrank_core::{Feedback, PriorityEngine, ScoringMode};
use taskrank_ingest::{RawTask, validate_tasks};

use crate::clock;
use crate::config::Config;

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    Analyze {
        #[serde(default)]
        tasks: Vec<RawTask>,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        today: Option<NaiveDate>,
    },
    Suggest {
        #[serde(default)]
        tasks: Vec<RawTask>,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        today: Option<NaiveDate>,
        #[serde(default)]
        limit: Option<usize>,
    },
    Feedback {
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        feedback: Vec<Feedback>,
    },
    Weights,
}

pub struct Session<'a> {
    config: &'a Config,
    engine: PriorityEngine,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            engine: config.engine(),
        }
    }

    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for (n, line) in input.lines().enumerate() {
            let line = line.context("read session input")?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match self.handle(&line) {
                Ok(result) => json!({ "ok": true, "result": result }),
                Err(e) => {
                    tracing::warn!(line = n + 1, error = %e, "session request failed");
                    json!({ "ok": false, "error": format!("{e:#}") })
                }
            };

            writeln!(output, "{response}").context("write session output")?;
            output.flush()?;
        }
        Ok(())
    }

    fn handle(&self, line: &str) -> Result<Value> {
        let request: Request = serde_json::from_str(line).context("malformed request")?;

        let value = match request {
            Request::Analyze { tasks, mode, today } => {
                let tasks = validate_tasks(tasks)?;
                let today = clock::resolve_today(today, &self.config.calendar.timezone)?;
                let ranked = self.engine.analyze(&tasks, self.config.mode(mode.as_deref()), today);
                serde_json::to_value(ranked)?
            }
            Request::Suggest {
                tasks,
                mode,
                today,
                limit,
            } => {
                let tasks = validate_tasks(tasks)?;
                let today = clock::resolve_today(today, &self.config.calendar.timezone)?;
                let limit = limit.unwrap_or(self.config.scoring.suggest_limit);
                let ranked = self
                    .engine
                    .suggest(&tasks, self.config.mode(mode.as_deref()), today, limit);
                serde_json::to_value(ranked)?
            }
            Request::Feedback { mode, feedback } => {
                // Feedback targets smart_balance unless told otherwise.
                let mode = mode.as_deref().map_or(ScoringMode::SmartBalance, ScoringMode::parse_lenient);
                serde_json::to_value(self.engine.apply_feedback(mode, &feedback))?
            }
            Request::Weights => serde_json::to_value(self.engine.weights())?,
        };

        Ok(value)
    }
}
