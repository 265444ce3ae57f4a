//! event-calendar - query a month-indexed event calendar
//!
//! Usage:
//!   event-calendar --events FILE show                         Print the calendar
//!   event-calendar --events FILE count MONTH                  Events in a month
//!   event-calendar --events FILE busiest                      Months with most events
//!   event-calendar --events FILE longest                      Longest event
//!   event-calendar --events FILE cancel --months M,.. --weekday N
//!   event-calendar --events FILE report                       Run every query in turn

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use event_calendar::{Calendar, Month};

mod loader;

/// Weekday number the report cancels (Saturday).
const REPORT_CANCEL_WEEKDAY: u8 = 6;
const REPORT_CANCEL_MONTHS: [Month; 4] = [Month::February, Month::March, Month::May, Month::June];
const REPORT_COUNT_MONTHS: [Month; 2] = [Month::February, Month::March];

#[derive(Parser)]
#[command(name = "event-calendar", version, about = "Query a month-indexed event calendar")]
struct Cli {
    /// JSON file holding an array of event records
    #[arg(short, long, global = true, default_value = "events.json")]
    events: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every month followed by its events in chronological order
    Show,
    /// Count the events in a month
    Count {
        /// Month name (e.g. "march", "mar") or number 1-12
        month: Month,
    },
    /// List the months that share the highest number of events
    Busiest,
    /// Print the name of the longest event
    Longest,
    /// Cancel every event on a weekday in the given months
    Cancel {
        /// Comma-separated months, e.g. "feb,mar,may"
        #[arg(short, long, value_delimiter = ',', required = true)]
        months: Vec<Month>,
        /// Weekday number, 1 = Monday through 7 = Sunday
        #[arg(short, long)]
        weekday: u8,
    },
    /// Print the calendar, run every query, cancel Saturday events and print it again
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut calendar = loader::load_calendar(&cli.events)?;

    match cli.command {
        Commands::Show => print!("{}", calendar),
        Commands::Count { month } => {
            println!("{}", calendar.total_events_in_month(month));
        }
        Commands::Busiest => println!("{}", format_months(&calendar.months_with_most_events())),
        Commands::Longest => println!("{}", calendar.longest_event().unwrap_or_default()),
        Commands::Cancel { months, weekday } => cmd_cancel(&mut calendar, &months, weekday)?,
        Commands::Report => cmd_report(&mut calendar)?,
    }

    Ok(())
}

fn cmd_cancel(calendar: &mut Calendar, months: &[Month], weekday: u8) -> Result<()> {
    let cancelled = calendar.cancel_events(months, weekday)?;
    println!("Cancelled {} events", cancelled);
    println!();
    print!("{}", calendar);
    Ok(())
}

fn cmd_report(calendar: &mut Calendar) -> Result<()> {
    println!("{}", calendar);

    for month in REPORT_COUNT_MONTHS {
        println!(
            "Events in {} = {}",
            month,
            calendar.total_events_in_month(month)
        );
    }
    println!(
        "Months with most events: {}",
        format_months(&calendar.months_with_most_events())
    );

    println!();
    println!(
        "Longest event: {}",
        calendar.longest_event().unwrap_or_default()
    );

    println!();
    let months: BTreeSet<Month> = REPORT_CANCEL_MONTHS.into_iter().collect();
    println!("Cancelling events in {}", format_months(&months));
    let cancelled = calendar.cancel_events(&REPORT_CANCEL_MONTHS, REPORT_CANCEL_WEEKDAY)?;
    println!("Cancelled {} events", cancelled);

    println!();
    println!("After cancelling ...");
    print!("{}", calendar);
    Ok(())
}

fn format_months(months: &BTreeSet<Month>) -> String {
    let names: Vec<&str> = months.iter().map(|m| m.name()).collect();
    format!("[{}]", names.join(", "))
}
