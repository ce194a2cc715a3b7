use askama::Template;
use orecal_calendar::{
    CivilDate, DateStyle, PaintedDay, WEEK_START, YearMonth, day_names, events_on, format_date,
    group_by_day, month_name, paint, weeks,
};
use orecal_shared::Event;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{AppError, CalendarState, ViewMode};

#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Template)]
#[template(path = "month.txt")]
struct MonthTemplate {
    title: String,
    header: String,
    rows: Vec<String>,
    events: Vec<String>,
}

#[derive(Template)]
#[template(path = "week.txt")]
struct WeekTemplate {
    title: String,
    days: Vec<WeekLine>,
}

struct WeekLine {
    marker: char,
    label: String,
    count: usize,
    events: Vec<String>,
}

#[derive(Template)]
#[template(path = "list.txt")]
struct ListTemplate {
    groups: Vec<ListGroup>,
}

struct ListGroup {
    marker: char,
    heading: String,
    events: Vec<String>,
}

#[derive(Serialize)]
struct MonthJson<'a> {
    month: YearMonth,
    selected: Option<CivilDate>,
    focused: Option<CivilDate>,
    days: Vec<PaintedDay<'a>>,
}

#[derive(Serialize)]
struct WeekDayJson<'a> {
    date: CivilDate,
    is_today: bool,
    events: Vec<&'a Event>,
}

#[derive(Serialize)]
struct ListDayJson<'a> {
    date: &'a str,
    events: &'a [&'a Event],
}

/// Renders the state's current view.
pub fn render(
    state: &CalendarState,
    events: &[Event],
    format: OutputFormat,
    now: OffsetDateTime,
) -> Result<String, AppError> {
    match state.view() {
        ViewMode::Month => render_month(state, events, format, now),
        ViewMode::Week => render_week(state, events, format, now),
        ViewMode::List => render_list(state, events, format, now),
    }
}

#[tracing::instrument(skip_all, fields(month = %state.visible()))]
pub fn render_month(
    state: &CalendarState,
    events: &[Event],
    format: OutputFormat,
    now: OffsetDateTime,
) -> Result<String, AppError> {
    let grid = state.month_grid_at(now)?;
    let groups = group_by_day(events);
    let painted = paint(&grid, &groups);
    let visible = state.visible();

    if format == OutputFormat::Json {
        let body = MonthJson {
            month: visible,
            selected: state.selected(),
            focused: state.focused(),
            days: painted,
        };
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let header = day_names(WEEK_START)
        .iter()
        .map(|name| format!(" {name}  "))
        .collect::<String>();

    let rows: Vec<String> = weeks(&painted)
        .map(|week| week.iter().map(|day| month_cell(state, day)).collect())
        .collect();

    let events: Vec<String> = painted
        .iter()
        .filter(|painted| painted.day.is_current_month)
        .flat_map(|painted| {
            painted
                .events
                .iter()
                .map(move |event| event_line(&painted.day.date, event))
        })
        .collect();

    let template = MonthTemplate {
        title: format!("{} {}", month_name(visible.month())?, visible.year()),
        header: header.trim_end().to_owned(),
        rows,
        events,
    };

    Ok(template.render()?)
}

#[tracing::instrument(skip_all)]
pub fn render_week(
    state: &CalendarState,
    events: &[Event],
    format: OutputFormat,
    now: OffsetDateTime,
) -> Result<String, AppError> {
    let week = state.week()?;
    let today = CivilDate::today_at(state.time_zone(), now)?;
    let groups = group_by_day(events);

    if format == OutputFormat::Json {
        let days = week
            .iter()
            .map(|date| WeekDayJson {
                date: *date,
                is_today: *date == today,
                events: events_on(&groups, date).to_vec(),
            })
            .collect::<Vec<_>>();
        return Ok(serde_json::to_string_pretty(&days)?);
    }

    let names = day_names(WEEK_START);
    let days = week
        .iter()
        .zip(names)
        .map(|(date, name)| {
            let on_day = events_on(&groups, date);
            let marker = if *date == today {
                '*'
            } else if state.selected() == Some(*date) {
                '>'
            } else {
                ' '
            };

            WeekLine {
                marker,
                label: format!("{name} {}", format_date(date, DateStyle::Short)),
                count: on_day.len(),
                events: on_day
                    .iter()
                    .map(|event| format!("    {} {}", event_summary(event), event.title))
                    .collect(),
            }
        })
        .collect();

    let title = match week.first() {
        Some(start) => format!("Week of {}", format_date(start, DateStyle::Long)),
        None => "Week".to_owned(),
    };

    Ok(WeekTemplate { title, days }.render()?)
}

#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn render_list(
    state: &CalendarState,
    events: &[Event],
    format: OutputFormat,
    now: OffsetDateTime,
) -> Result<String, AppError> {
    let groups = group_by_day(events);

    if format == OutputFormat::Json {
        let days = groups
            .iter()
            .map(|(date, events)| ListDayJson {
                date,
                events: events.as_slice(),
            })
            .collect::<Vec<_>>();
        return Ok(serde_json::to_string_pretty(&days)?);
    }

    let today = CivilDate::today_at(state.time_zone(), now)?;
    let mut list = Vec::with_capacity(groups.len());

    for (key, on_day) in &groups {
        let date = match key.parse::<CivilDate>() {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(day_key = %key, error = %e, "skipping events with malformed date");
                continue;
            }
        };

        list.push(ListGroup {
            marker: if date == today { '*' } else { ' ' },
            heading: format_date(&date, DateStyle::Long),
            events: on_day
                .iter()
                .map(|event| {
                    let mut line = format!("    {} {}", event_summary(event), event.title);
                    if let Some(score) = event.importance_score {
                        line.push_str(&format!(" (Importance: {score}/10)"));
                    }
                    line
                })
                .collect(),
        });
    }

    Ok(ListTemplate { groups: list }.render()?)
}

fn month_cell(state: &CalendarState, painted: &PaintedDay<'_>) -> String {
    let day = &painted.day;

    let (open, close) = if state.focused() == Some(day.date) {
        ('(', ')')
    } else if day.is_today {
        ('[', ']')
    } else if state.selected() == Some(day.date) {
        ('<', '>')
    } else if day.is_current_month {
        (' ', ' ')
    } else {
        ('.', ' ')
    };
    let mark = if painted.events.is_empty() { ' ' } else { '*' };

    format!(" {open}{:>2}{close}{mark}", day.date.day())
}

fn event_summary(event: &Event) -> String {
    format!("{:<6} {:<20}", event.asx_code, event.event_type.label())
}

fn event_line(date: &CivilDate, event: &Event) -> String {
    format!(
        "{:<7} {} {}",
        format_date(date, DateStyle::Short),
        event_summary(event),
        event.title
    )
}
