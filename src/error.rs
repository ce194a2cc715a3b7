use orecal_calendar::CalendarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Calendar error: {0}")]
    CalendarError(#[from] CalendarError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Failed to read events from {path}: {source}")]
    EventsFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    RenderError(#[from] askama::Error),
}
