use orecal_shared::{Event, EventType};

use crate::CivilDate;

/// Narrows the events shown on the calendar.
///
/// Empty criteria match everything. A commodity filter keeps events that
/// share at least one commodity with it, and the date range is inclusive on
/// both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub commodities: Vec<String>,
    pub event_types: Vec<EventType>,
    pub start: Option<CivilDate>,
    pub end: Option<CivilDate>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.commodities.is_empty()
            && self.event_types.is_empty()
            && self.start.is_none()
            && self.end.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        if !self.commodities.is_empty()
            && !event
                .commodities
                .iter()
                .any(|commodity| self.commodities.contains(commodity))
        {
            return false;
        }

        if !self.event_types.is_empty() && !self.event_types.contains(&event.event_type) {
            return false;
        }

        if self.start.is_none() && self.end.is_none() {
            return true;
        }

        // An event without a readable date cannot be placed in a range
        let Ok(date) = event.day_key().parse::<CivilDate>() else {
            return false;
        };

        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn apply(&self, events: Vec<Event>) -> Vec<Event> {
        if self.is_empty() {
            return events;
        }

        let before = events.len();
        let kept = events
            .into_iter()
            .filter(|event| self.matches(event))
            .collect::<Vec<_>>();

        tracing::debug!(before, after = kept.len(), "filtered events");

        kept
    }
}
