use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use spaced_review::export::json::{export_state_to_path, load_or_default};
use spaced_review::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sm2", about = "SM-2 review scheduler for a single card", version)]
struct Cli {
    /// JSON file holding the card's learning state (missing file = new card)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Review instant as RFC 3339 (default: current time)
    #[arg(long, global = true, value_parser = parse_instant)]
    now: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Record a review and save the updated state
    Review {
        /// Recall quality, 0-5
        #[arg(allow_negative_numbers = true)]
        quality: i32,
    },

    /// Show the interval a review would give, without saving anything
    Preview {
        /// Recall quality, 0-5
        #[arg(allow_negative_numbers = true)]
        quality: i32,
    },

    /// Show projected intervals for the forgot / hard / easy grades
    Project,

    /// Render a day count the way intervals are displayed
    Format { days: u32 },

    /// Tell whether the card is due
    Due,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e))
}

fn load_state(path: Option<&PathBuf>) -> anyhow::Result<LearningState> {
    match path {
        Some(path) => load_or_default(path)
            .with_context(|| format!("failed to load state from '{}'", path.display())),
        None => Ok(LearningState::default()),
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

fn render_state(state: &LearningState, format: &OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(state)?,
        OutputFormat::Plain => {
            let mut out = format!(
                "repetitions: {}\ninterval:    {}\neasiness:    {:.2}",
                state.repetitions,
                format_interval(state.interval),
                state.easiness
            );
            if let Some(next) = state.next_review {
                out.push_str(&format!("\nnext review: {}", next.format(TIMESTAMP_FORMAT)));
            }
            out
        }
    })
}

fn render_projection(intervals: &ProjectedIntervals, format: &OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(intervals)?,
        OutputFormat::Plain => intervals
            .iter()
            .map(|(quality, label)| format!("quality {}: {}", quality, label))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn render_due(state: &LearningState, now: DateTime<Utc>, format: &OutputFormat) -> String {
    let due = state.is_due(now);
    match format {
        OutputFormat::Json => serde_json::json!({
            "due": due,
            "new": !state.is_reviewed(),
            "next_review": state.next_review,
        })
        .to_string(),
        OutputFormat::Plain => match state.next_review {
            None => "new card, not reviewed yet".to_string(),
            Some(_) if due => "due".to_string(),
            Some(next) => format!("not due until {}", next.format(TIMESTAMP_FORMAT)),
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let clock: Box<dyn Clock> = match cli.now {
        Some(at) => Box::new(FixedClock::new(at)),
        None => Box::new(SystemClock),
    };
    let mut state = load_state(cli.state.as_ref())?;

    match cli.command {
        Command::Review { quality } => {
            apply_review(&mut state, quality, clock.as_ref())?;
            log::info!(
                "reviewed with quality {}: interval {}d, repetitions {}, easiness {:.2}",
                quality,
                state.interval,
                state.repetitions,
                state.easiness
            );

            if let Some(path) = &cli.state {
                export_state_to_path(&state, path)
                    .with_context(|| format!("failed to save state to '{}'", path.display()))?;
            }

            println!("{}", render_state(&state, &cli.format)?);
        }
        Command::Preview { quality } => {
            let days = preview_review(state.repetitions, state.interval, state.easiness, quality)?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "quality": quality, "interval": days, "label": format_interval(days) })
                ),
                OutputFormat::Plain => println!("{} ({} days)", format_interval(days), days),
            }
        }
        Command::Project => {
            println!("{}", render_projection(&state.projected_intervals(), &cli.format)?);
        }
        Command::Format { days } => println!("{}", format_interval(days)),
        Command::Due => {
            let now = clock.now();
            log::debug!("due check at {}: {}", now, state.is_due(now));
            println!("{}", render_due(&state, now, &cli.format));
        }
    }

    Ok(())
}
