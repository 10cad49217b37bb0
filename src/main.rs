use clap::{Parser, Subcommand};
use kalenteri::commands::{self, check, output, overlaps, view};
use kalenteri::components::events::{CalendarEvent, CalendarView, SearchState};
use kalenteri::components::{HolidayProvider, StaticHolidayProvider};
use kalenteri::config::Config;
use kalenteri::error::Error;
use kalenteri::startup;
use kalenteri::utils::dates::WeekStart;
use serde::Serialize;
use tracing::info;

/// Kalenteri: calendar events with overlap warnings and week/month views
#[derive(Parser, Debug)]
#[command(name = "kalenteri")]
#[command(version, about, long_about = None)]
struct Args {
    /// Events file (JSON array), overrides EVENTS_FILE
    #[arg(short, long, global = true)]
    file: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the events of a week or month
    View {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Calendar view (week or month)
        #[arg(short, long)]
        view: Option<CalendarView>,
        /// Search title, description and location
        #[arg(short, long, default_value = "")]
        search: String,
        /// First day of the week (sunday or monday)
        #[arg(long)]
        week_start: Option<WeekStart>,
        /// Move this many views forwards (negative for backwards)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        shift: i32,
    },
    /// List stored events overlapping a stored event
    Overlaps {
        /// Event id
        id: String,
    },
    /// Check a new or edited event for clashes before saving it
    Check {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:mm)
        start: String,
        /// End time (HH:mm)
        end: String,
        /// Id of the event being edited
        #[arg(long, default_value = "")]
        id: String,
        /// Title of the event
        #[arg(short, long, default_value = "")]
        title: String,
    },
    /// Show the public holidays of a month
    Holidays {
        /// Any date within the month, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let args = Args::parse();

    // Load configuration
    let mut config: Config = startup::load_config()?;
    if let Some(file) = &args.file {
        config.events_file = file.clone();
    }

    let provider = StaticHolidayProvider::new(&config.locale);

    match args.command {
        Command::View {
            date,
            view,
            search,
            week_start,
            shift,
        } => {
            let events = commands::load_events(&config.events_file)?;
            let reference = commands::reference_date(date.as_deref(), &config)?;

            let mut state = SearchState::new(reference, view.unwrap_or(config.default_view))
                .with_week_start(week_start.unwrap_or(config.week_start));
            state.set_search_term(search);
            state.shift(shift);

            let window = state.window();
            let holidays = provider.fetch_holidays_between(window.start, window.end).await;
            let report = view::build_view_report(&events, &state, holidays);
            info!("Showing {} of {} events", report.events.len(), events.len());

            if args.json {
                print_json(&report)?;
            } else {
                print!("{}", output::render_view(&report, &state));
            }
        }
        Command::Overlaps { id } => {
            let events = commands::load_events(&config.events_file)?;
            let clashes = overlaps::overlapping_with(&events, &id)?;
            if args.json {
                print_json(&clashes)?;
            } else {
                print!("{}", output::render_overlaps(&clashes));
            }
        }
        Command::Check {
            date,
            start,
            end,
            id,
            title,
        } => {
            let events = commands::load_events(&config.events_file)?;
            let candidate = CalendarEvent::new(&id, &date, &start, &end).with_title(&title);
            let clashes = check::check_event(&events, &candidate)?;
            if args.json {
                print_json(&clashes)?;
            } else {
                print!("{}", output::render_check(&clashes));
            }
        }
        Command::Holidays { date } => {
            let reference = commands::reference_date(date.as_deref(), &config)?;
            let holidays = provider.fetch_holidays(reference).await;
            if args.json {
                print_json(&holidays)?;
            } else {
                print!("{}", output::render_holidays(&holidays));
            }
        }
    }

    Ok(())
}
