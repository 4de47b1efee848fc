use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use taskrank_core::ScoringMode;
use tracing_subscriber::EnvFilter;

mod clock;
mod config;
mod output;
mod session;
mod state;

use config::Config;
use output::OutputFormat;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "taskrank",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TASKRANK_BUILD_SHA"), ")"),
    about = "Rank tasks by priority and explain why"
)]
struct Cli {
    /// Config file (default: ~/.taskrank/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score, explain and sort every task in a batch
    Analyze {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Show only the top tasks of a batch
    Suggest {
        #[command(flatten)]
        batch: BatchArgs,

        /// How many tasks to show (default: config suggest_limit, normally 3)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Preview how votes would move the default weights (display only)
    ///
    /// Weights start fresh in every process and are not saved, so this never
    /// affects a later `analyze` or `suggest`. Use `taskrank session` to send
    /// feedback that carries over to later rankings.
    Feedback {
        /// JSON array of {"id", "helpful"}
        #[arg(long)]
        input: PathBuf,

        /// Mode the votes refer to (only smart_balance changes weights)
        #[arg(long, default_value = "smart_balance")]
        mode: String,
    },

    /// Read JSON requests from stdin, one per line, sharing one weight state
    Session,

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct BatchArgs {
    /// Task file: JSON array, or CSV when the extension is .csv
    #[arg(long)]
    input: PathBuf,

    /// fastest_wins | high_impact | deadline_driven | smart_balance
    #[arg(long)]
    mode: Option<String>,

    /// Score as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = config::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze { batch } => {
            let cfg = config::load_config(&config_path)?;
            run_batch(&cfg, &batch, None)?;
        }

        Command::Suggest { batch, limit } => {
            let cfg = config::load_config(&config_path)?;
            let limit = limit.unwrap_or(cfg.scoring.suggest_limit);
            run_batch(&cfg, &batch, Some(limit))?;
        }

        Command::Feedback { input, mode } => {
            let cfg = config::load_config(&config_path)?;
            let votes = taskrank_ingest::load_feedback(&input)?;
            let outcome = cfg.engine().apply_feedback(ScoringMode::parse_lenient(&mode), &votes);
            output::write_feedback(&mut io::stdout().lock(), &outcome)?;
            eprintln!("Note: weights live for one process; use `taskrank session` to keep them.");
        }

        Command::Session => {
            let cfg = config::load_config(&config_path)?;
            let stdin = io::stdin();
            Session::new(&cfg).run(stdin.lock(), BufWriter::new(io::stdout().lock()))?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(cli.config.as_deref())?,
            ConfigCommand::Show => {
                let cfg = config::load_config(&config_path)?;
                println!("# {}", describe_path(&config_path));
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn run_batch(cfg: &Config, batch: &BatchArgs, limit: Option<usize>) -> Result<()> {
    if !batch.input.exists() {
        bail!("task file not found: {}", batch.input.display());
    }

    let tasks = taskrank_ingest::load_tasks(&batch.input)?;
    let today = clock::resolve_today(batch.today, &cfg.calendar.timezone)?;
    let mode = cfg.mode(batch.mode.as_deref());
    let engine = cfg.engine();

    tracing::info!(tasks = tasks.len(), %mode, %today, "ranking batch");

    let ranked = match limit {
        Some(n) => engine.suggest(&tasks, mode, today, n),
        None => engine.analyze(&tasks, mode, today),
    };

    output::write_ranked(&mut io::stdout().lock(), &ranked, batch.format)
}

fn describe_path(p: &Path) -> String {
    if p.exists() {
        p.display().to_string()
    } else {
        format!("{} (not found, showing defaults)", p.display())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_carries_build_sha() {
        let cmd = Cli::command();
        let version = cmd.get_version().unwrap();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(env!("TASKRANK_BUILD_SHA")));
    }

    #[test]
    fn feedback_help_points_to_session() {
        let cmd = Cli::command();
        let feedback = cmd.find_subcommand("feedback").unwrap();
        assert!(feedback.get_about().unwrap().to_string().contains("display only"));
        let long = feedback.get_long_about().unwrap().to_string();
        assert!(long.contains("taskrank session"));
    }
}
