use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

mod config;
mod input;

use triage_core::{apply_sort, rank, suggest_top, PriorityTier, SortStrategy};

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Task priority triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a batch of tasks and print them in priority order
    Analyze {
        /// JSON file with an array of tasks (defaults to stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Ordering of the scored output
        #[arg(long, value_enum, default_value_t = SortArg::Smart)]
        sort: SortArg,

        /// Pin the scoring date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the top tasks to work on, with explanations
    Suggest {
        /// JSON file with an array of tasks (defaults to the configured store)
        #[arg(long)]
        file: Option<PathBuf>,

        /// How many suggestions to print (default from config: 3)
        #[arg(long)]
        count: Option<usize>,

        /// Emit JSON instead of human-readable lines
        #[arg(long)]
        json: bool,

        /// Pin the scoring date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Write the default config to ~/.triage/config.toml
    InitConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    /// Score descending (the engine's order)
    Smart,
    /// Least effort first
    Fastest,
    /// Importance descending
    Impact,
    /// Earliest due date first
    Deadline,
}

impl From<SortArg> for SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Smart => SortStrategy::Smart,
            SortArg::Fastest => SortStrategy::Fastest,
            SortArg::Impact => SortStrategy::Impact,
            SortArg::Deadline => SortStrategy::Deadline,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { file, sort, today } => {
            analyze(file, sort.into(), today)?;
        }

        Command::Suggest {
            file,
            count,
            json,
            today,
        } => {
            suggest(file, count, json, today)?;
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}

// The single place the wall clock is read; --today bypasses it entirely.
fn scoring_date(pinned: Option<NaiveDate>) -> NaiveDate {
    pinned.unwrap_or_else(|| Local::now().date_naive())
}

fn analyze(file: Option<PathBuf>, strategy: SortStrategy, today: Option<NaiveDate>) -> Result<()> {
    let body = input::read_input(file.as_deref())?;
    let tasks = input::parse_batch(&body)?;
    let today = scoring_date(today);

    let mut scored = rank(&tasks, today);
    apply_sort(&mut scored, strategy, today);

    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}

fn suggest(
    file: Option<PathBuf>,
    count: Option<usize>,
    json: bool,
    today: Option<NaiveDate>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let path = match file {
        Some(p) => p,
        None => cfg.store_path()?,
    };
    if !path.exists() {
        bail!("task store not found: {} (pass --file <path>)", path.display());
    }

    let body = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let tasks = input::parse_batch(&body)?;
    let today = scoring_date(today);
    let k = count.unwrap_or(cfg.suggest.count);

    let suggestions = suggest_top(&tasks, k, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No tasks to suggest.");
        return Ok(());
    }

    for s in &suggestions {
        println!(
            "[{}] score={} | {} | {}",
            PriorityTier::classify(s.score).label(),
            s.score,
            s.task.title,
            s.explanation
        );
    }

    Ok(())
}
