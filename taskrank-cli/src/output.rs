use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use taskrank_core::{AnalyzedTask, FeedbackOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

pub fn write_ranked(out: &mut impl Write, ranked: &[AnalyzedTask], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(ranked).context("serialize results")?;
            writeln!(out, "{s}")?;
        }
        OutputFormat::Table => {
            if ranked.is_empty() {
                writeln!(out, "(no tasks)")?;
            }
            for (i, t) in ranked.iter().enumerate() {
                let cycle = if t.in_cycle { " [cycle]" } else { "" };
                writeln!(
                    out,
                    "{:>2}. [{}] score={:.2} | {} | {}{}",
                    i + 1,
                    t.priority_band,
                    t.score,
                    t.task.id,
                    t.task.title,
                    cycle
                )?;
                writeln!(out, "    {}", t.explanation)?;
            }
        }
    }
    Ok(())
}

pub fn write_feedback(out: &mut impl Write, outcome: &FeedbackOutcome) -> Result<()> {
    let s = serde_json::to_string_pretty(outcome).context("serialize feedback outcome")?;
    writeln!(out, "{s}")?;
    Ok(())
}
