//! `meetq` CLI — find free meeting slots in a day's calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Read a request document from stdin, print slots as JSON
//! cat day.json | meetq query
//!
//! # Read from file, print HH:MM ranges
//! meetq query -i day.json --format text
//!
//! # Override the document's request
//! meetq query -i day.json --duration 45 --attendee ana --attendee ben
//!
//! # Show when the requested attendees are busy
//! meetq busy -i day.json
//! ```
//!
//! The input document is `{ "events": [...], "request": {...} }` where each
//! event is `{ "title", "when": { "start", "end" }, "attendees": [...] }` and
//! the request is `{ "attendees": [...], "duration" }`. Times are minutes
//! since midnight.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::{MeetingDocument, TimeRange, END_OF_DAY};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find free time slots for a meeting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot where the meeting fits
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Override the requested duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Replace the requested attendees (repeatable)
        #[arg(long = "attendee")]
        attendees: Vec<String>,
    },
    /// Print the merged busy ranges of the requested attendees
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON array of `{start, end}` objects
    Json,
    /// One `HH:MM-HH:MM` line per slot
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            duration,
            attendees,
        } => {
            let mut doc = read_document(input.as_deref())?;

            if let Some(duration) = duration {
                doc.request.duration = duration;
            }
            if !attendees.is_empty() {
                doc.request.attendees = attendees.into_iter().collect();
            }

            let slots = doc.slots();
            info!(
                events = doc.events.len(),
                slots = slots.len(),
                "meeting query complete"
            );

            let rendered = match format {
                Format::Json => {
                    let mut json = serde_json::to_string_pretty(&slots)
                        .context("Failed to serialize slots")?;
                    json.push('\n');
                    json
                }
                Format::Text => render_lines(&slots),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy { input } => {
            let doc = read_document(input.as_deref())?;
            write_output(None, &render_lines(&doc.busy()))?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_document(path: Option<&Path>) -> Result<MeetingDocument> {
    let raw = read_input(path)?;
    let doc = MeetingDocument::from_json(&raw).context("Failed to parse request document")?;
    debug!(
        events = doc.events.len(),
        attendees = doc.request.attendees.len(),
        duration = doc.request.duration,
        "loaded request document"
    );
    Ok(doc)
}

fn render_lines(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}-{}\n", clock(r.start()), clock(r.end())))
        .collect()
}

/// Format a minute of the day as `HH:MM`; the exclusive end of day is `24:00`.
fn clock(minute: u32) -> String {
    if minute >= END_OF_DAY {
        return "24:00".to_string();
    }
    NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "24:00".to_string())
}

/// Slurp the request document from `path`, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    let mut reader: Box<dyn Read> = match path {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read request document")?;
    Ok(raw)
}

/// Send rendered output to `path`, or stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to write file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    writer
        .write_all(content.as_bytes())
        .context("Failed to write output")?;
    writer.flush().context("Failed to flush output")
}
