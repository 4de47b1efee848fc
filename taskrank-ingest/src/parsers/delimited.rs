//! CSV task sheets.
//!
//! Expected header (column order is free, extra columns are ignored):
//! id,title,importance,estimated_hours,due_date,dependencies
//!
//! Empty cells are null. `dependencies` holds ids separated by `;`, `,` or `|`
//! (quote the cell when using commas). Dates are `YYYY-MM-DD`.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::io::Read;
use taskrank_core::Task;

use crate::types::RawTask;
use crate::validate::validate_tasks;

pub fn parse_tasks_csv(reader: impl Read) -> Result<Vec<Task>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: HashMap<String, usize> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_ascii_lowercase(), i))
        .collect();

    if !columns.contains_key("id") {
        bail!("CSV header has no `id` column");
    }

    let dep_split = Regex::new(r"[;,|]")?;
    let mut raw = Vec::new();

    for (n, result) in rdr.records().enumerate() {
        // Header is line 1.
        let line = n + 2;
        let record = result.with_context(|| format!("reading CSV line {line}"))?;

        let cell = |name: &str| field(&columns, &record, name);

        if record.iter().all(str::is_empty) {
            continue;
        }

        let importance = cell("importance")
            .map(|s| s.parse::<i64>())
            .transpose()
            .with_context(|| format!("line {line}: importance is not an integer"))?;

        let estimated_hours = cell("estimated_hours")
            .map(|s| s.parse::<f64>())
            .transpose()
            .with_context(|| format!("line {line}: estimated_hours is not a number"))?;

        let due_date = cell("due_date")
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .transpose()
            .with_context(|| format!("line {line}: due_date is not YYYY-MM-DD"))?;

        let dependencies = cell("dependencies").map(|s| {
            dep_split
                .split(s)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect()
        });

        raw.push(RawTask {
            id: cell("id").map(str::to_string),
            title: cell("title").map(str::to_string),
            importance,
            estimated_hours,
            due_date,
            dependencies,
        });
    }

    validate_tasks(raw)
}

fn field<'r>(columns: &HashMap<String, usize>, record: &'r csv::StringRecord, name: &str) -> Option<&'r str> {
    columns
        .get(name)
        .and_then(|&i| record.get(i))
        .filter(|s| !s.is_empty())
}
