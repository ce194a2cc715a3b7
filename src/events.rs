use std::path::Path;

use orecal_shared::Event;

use crate::AppError;

/// Reads a JSON array of events.
#[tracing::instrument]
pub fn load_events(path: &Path) -> Result<Vec<Event>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::EventsFileError {
        path: path.display().to_string(),
        source,
    })?;

    let events: Vec<Event> = serde_json::from_str(&raw)?;
    tracing::debug!(count = events.len(), "events loaded");

    Ok(events)
}
