use std::path::PathBuf;

use clap::Args;
use orecal::{CalendarState, OutputFormat, ViewMode, config::Config};
use orecal_calendar::{CivilDate, EventFilter, YearMonth};
use orecal_shared::EventType;
use time::OffsetDateTime;

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// JSON file holding an array of events
    #[arg(long)]
    pub events: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep events mentioning any of these commodities
    #[arg(long = "commodity", value_delimiter = ',')]
    pub commodities: Vec<String>,

    /// Keep events of these types, e.g. drilling_results,quarterly_report
    #[arg(long = "event-type", value_delimiter = ',')]
    pub event_types: Vec<EventType>,

    /// Earliest event date to keep (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<CivilDate>,

    /// Latest event date to keep (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<CivilDate>,
}

impl OutputArgs {
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            commodities: self.commodities.clone(),
            event_types: self.event_types.clone(),
            start: self.since,
            end: self.until,
        }
    }
}

pub fn show(
    config: &Config,
    view: ViewMode,
    visible: Option<YearMonth>,
    date: Option<CivilDate>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let time_zone = config.calendar.time_zone.clone();

    let mut state = match (visible, date) {
        (_, Some(date)) => {
            let mut state = CalendarState::new(YearMonth::containing(date), time_zone)?;
            state.select(date);
            state
        }
        (Some(visible), None) => CalendarState::new(visible, time_zone)?,
        (None, None) => CalendarState::current(time_zone)?,
    };
    state.set_view(view);

    let events = match &output.events {
        Some(path) => output.filter().apply(orecal::load_events(path)?),
        None => Vec::new(),
    };

    tracing::info!(
        view = %view,
        month = %state.visible(),
        events = events.len(),
        "Rendering calendar"
    );

    let rendered = orecal::render(&state, &events, output.format, OffsetDateTime::now_utc())?;
    println!("{rendered}");

    Ok(())
}
