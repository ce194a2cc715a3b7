use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{CivilDate, Result, YearMonth};

#[derive(
    EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Signed day offset of one step.
    pub fn days(&self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -7,
            Direction::Down => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusMove {
    pub focused: CivilDate,
    pub month_changed: bool,
    /// Month the caller must switch its grid to, set iff `month_changed`.
    pub visible: Option<YearMonth>,
}

pub fn navigate(focused: CivilDate, direction: Direction) -> Result<FocusMove> {
    let next = focused.add_days(direction.days())?;
    let month_changed = !next.is_same_month(&focused);

    tracing::debug!(from = %focused, to = %next, %direction, month_changed, "focus moved");

    Ok(FocusMove {
        focused: next,
        month_changed,
        visible: month_changed.then(|| YearMonth::containing(next)),
    })
}
