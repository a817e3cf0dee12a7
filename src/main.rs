// Week Calendar
// Prints one week of the seeded calendar as text or JSON

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use week_calendar::models::layout::WeekLayout;
use week_calendar::services::event::EventStore;
use week_calendar::services::layout::WeekViewProjector;
use week_calendar::services::settings::SettingsService;
use week_calendar::utils::date::{parse_event_date, shift_weeks};

#[derive(Parser)]
#[command(name = "week-calendar")]
#[command(about = "Weekly calendar view with lane-packed events")]
#[command(version)]
struct Args {
    /// Reference date (D/M/YYYY), defaults to today
    #[arg(long, value_parser = parse_event_date)]
    date: Option<NaiveDate>,

    /// Weeks to move forward (or back, if negative) from the reference date
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    weeks: i64,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting Week Calendar");

    let args = Args::parse();

    let settings_service = SettingsService::new(args.config);
    if let Some(path) = settings_service.path() {
        log::debug!("Settings path: {}", path.display());
    }
    let settings = settings_service.load().context("Failed to load settings")?;
    let store = EventStore::with_mock_data().context("Failed to seed event store")?;

    let today = Local::now().date_naive();
    let reference = args.date.unwrap_or(today);
    let reference = shift_weeks(reference, args.weeks)
        .ok_or_else(|| anyhow!("Cannot move {} weeks from {}", args.weeks, reference))?;

    let layout = WeekViewProjector::new(settings).project(reference, store.events())
        .with_context(|| format!("Failed to lay out the week of {}", reference))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_layout(&layout);
    }

    Ok(())
}

fn print_layout(layout: &WeekLayout) {
    println!("{}", layout.title);
    println!("(scroll to {})", layout.hour_labels[layout.scroll_hour as usize]);

    for day in &layout.days {
        println!();
        println!("{} {}", day.weekday, day.day_of_month);
        if day.is_empty() {
            println!("  no events");
            continue;
        }
        for (index, lane) in day.lanes.iter().enumerate() {
            let blocks: Vec<String> = lane
                .iter()
                .map(|event| format!("{} {}-{}", event.title, event.start, event.end))
                .collect();
            println!("  lane {}: {}", index + 1, blocks.join(" | "));
        }
    }
}
