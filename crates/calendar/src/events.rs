use std::collections::BTreeMap;

use orecal_shared::Event;
use serde::Serialize;

use crate::{CalendarDay, CivilDate};

/// Events keyed by `YYYY-MM-DD`, in ascending key order.
pub type EventsByDay<'a> = BTreeMap<String, Vec<&'a Event>>;

/// Groups events by the date portion of `event_date`, keeping input order
/// within a day.
pub fn group_by_day(events: &[Event]) -> EventsByDay<'_> {
    let mut groups = EventsByDay::new();

    for event in events {
        groups
            .entry(event.day_key().to_owned())
            .or_default()
            .push(event);
    }

    groups
}

pub fn events_on<'a, 'g>(groups: &'g EventsByDay<'a>, date: &CivilDate) -> &'g [&'a Event] {
    groups
        .get(&date.day_key())
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize)]
pub struct PaintedDay<'a> {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub events: Vec<&'a Event>,
}

/// Pairs every grid day with the events that fall on it.
pub fn paint<'a>(days: &[CalendarDay], groups: &EventsByDay<'a>) -> Vec<PaintedDay<'a>> {
    days.iter()
        .map(|day| PaintedDay {
            day: *day,
            events: events_on(groups, &day.date).to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use orecal_shared::EventType;

    use super::*;

    fn event(id: &str, event_date: &str) -> Event {
        Event {
            id: id.to_owned(),
            title: format!("event {id}"),
            event_date: event_date.to_owned(),
            event_type: EventType::ProductionUpdate,
            company_name: "Example Mining".to_owned(),
            asx_code: "EXM".to_owned(),
            importance_score: None,
            commodities: vec!["Gold".to_owned()],
        }
    }

    #[test]
    fn test_group_by_day_merges_time_suffixes() {
        let events = vec![
            event("1", "2025-01-15"),
            event("2", "2025-01-14"),
            event("3", "2025-01-15T09:30:00Z"),
        ];
        let groups = group_by_day(&events);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["2025-01-14", "2025-01-15"]
        );
        let ids = groups["2025-01-15"]
            .iter()
            .map(|e| e.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_events_on_uses_padded_key() -> crate::Result<()> {
        let events = vec![event("1", "2025-03-07")];
        let groups = group_by_day(&events);

        assert_eq!(events_on(&groups, &CivilDate::new(2025, 3, 7)?).len(), 1);
        assert!(events_on(&groups, &CivilDate::new(2025, 3, 8)?).is_empty());

        Ok(())
    }
}
