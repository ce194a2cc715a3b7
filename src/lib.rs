pub mod config;
pub mod error;
pub mod events;
pub mod observability;
pub mod state;
pub mod view;

pub use config::Config;
pub use error::AppError;
pub use events::load_events;
pub use state::{CalendarState, Key, KeyContext, ViewMode};
pub use view::{OutputFormat, render};
