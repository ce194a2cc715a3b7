mod navigate;
mod view;

pub use navigate::navigate;
pub use view::{OutputArgs, show};
