mod date;
mod error;
mod events;
mod filter;
mod focus;
mod format;
mod grid;
mod locale;
mod month;

pub use date::*;
pub use error::*;
pub use events::*;
pub use filter::*;
pub use focus::*;
pub use format::*;
pub use grid::*;
pub use locale::*;
pub use month::*;
