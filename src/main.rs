mod filter;
mod parser;
mod pipeline;
mod schedule;
mod source;
mod timetable;
mod upcoming;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt_scraper", about = "Group timetable extractor for tt.audit.msu.ru")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a captured cell dump into schedule.json
    Run {
        /// JSON array of {compact, detail} cell captures
        input: PathBuf,
        /// Output artifact (overwritten unconditionally)
        #[arg(short, long, default_value = "schedule.json")]
        output: PathBuf,
        /// Collect lessons from today through today+DAYS, inclusive
        #[arg(long, default_value_t = 5)]
        days: u64,
        /// Cohort identifier stamped on every record
        #[arg(long, default_value = "303")]
        group: String,
    },
    /// Show pending lesson reminders from a saved schedule
    Upcoming {
        /// Schedule artifact produced by `run`
        #[arg(default_value = "schedule.json")]
        schedule: PathBuf,
        /// Default reminder lead in minutes (lesson 3 always gets 45)
        #[arg(short, long, default_value_t = 15)]
        minutes: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output, days, group } => {
            let today = Local::now().date_naive();
            let window = filter::DateWindow::next_days(today, days);
            println!(
                "Collecting lessons for group {} from {} to {}",
                group,
                window.min.format(timetable::DATE_FORMAT),
                window.max.format(timetable::DATE_FORMAT),
            );

            let mut cells = source::JsonDumpSource::from_path(&input)?;
            let (lessons, counts) = pipeline::run(&mut cells, &window, &group)?;
            let ordered = schedule::assemble(lessons);
            schedule::write(&output, &ordered)?;
            println!("Saved {} lessons to {}", ordered.len(), output.display());
            counts.print();

            if !ordered.is_empty() {
                println!("\nFirst lessons:");
                for lesson in ordered.iter().take(5) {
                    println!(
                        "  {} ({}) пара {} {}-{}  {}",
                        lesson.date,
                        lesson.weekday,
                        lesson.lesson_number,
                        lesson.time_start,
                        lesson.time_end,
                        lesson.subject,
                    );
                }
            }
            Ok(())
        }
        Commands::Upcoming { schedule: path, minutes } => {
            let lessons = schedule::load(&path)?;
            let now = Utc::now().with_timezone(&upcoming::moscow());
            let pending = upcoming::upcoming(&lessons, now, minutes);
            if pending.is_empty() {
                println!("No upcoming lessons.");
                return Ok(());
            }
            println!("{} upcoming lessons:", pending.len());
            for n in &pending {
                let mark = if upcoming::is_distance(&n.lesson.room) {
                    " [дистанционно]"
                } else {
                    ""
                };
                println!(
                    "  notify {}  {} ({}) пара {} {}-{}  {}{}",
                    n.notify_at.format("%d.%m.%Y %H:%M"),
                    n.lesson.date,
                    n.lesson.weekday,
                    n.lesson.lesson_number,
                    n.lesson.time_start,
                    n.lesson.time_end,
                    n.lesson.subject,
                    mark,
                );
            }
            Ok(())
        }
    }
}
