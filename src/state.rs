use orecal_calendar::{
    CalendarDay, CivilDate, Direction, Result, YearMonth, build_month_grid_at, build_week,
    lookup_time_zone, navigate,
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    List,
}

/// Keys the calendar reacts to, named after DOM `KeyboardEvent.key` values.
#[derive(EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    #[strum(serialize = "Space", serialize = " ")]
    Space,
    PageUp,
    PageDown,
    Home,
}

impl Key {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyContext {
    #[default]
    Calendar,
    /// A text field owns the key; the calendar ignores it.
    TextInput,
}

/// Visible month, selection and keyboard focus of one calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    visible: YearMonth,
    selected: Option<CivilDate>,
    focused: Option<CivilDate>,
    view: ViewMode,
    time_zone: String,
}

impl CalendarState {
    pub fn new(visible: YearMonth, time_zone: impl Into<String>) -> Result<Self> {
        let time_zone = time_zone.into();
        lookup_time_zone(&time_zone)?;

        Ok(Self {
            visible,
            selected: None,
            focused: None,
            view: ViewMode::default(),
            time_zone,
        })
    }

    /// State showing the current month in `time_zone`.
    pub fn current(time_zone: impl Into<String>) -> Result<Self> {
        let time_zone = time_zone.into();
        let visible = YearMonth::current(&time_zone)?;

        Self::new(visible, time_zone)
    }

    pub fn visible(&self) -> YearMonth {
        self.visible
    }

    pub fn selected(&self) -> Option<CivilDate> {
        self.selected
    }

    pub fn focused(&self) -> Option<CivilDate> {
        self.focused
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn next_month(&mut self) -> Result<()> {
        self.visible = self.visible.next()?;
        Ok(())
    }

    pub fn previous_month(&mut self) -> Result<()> {
        self.visible = self.visible.previous()?;
        Ok(())
    }

    pub fn go_to_month(&mut self, year: i32, month: u8) -> Result<()> {
        self.visible = YearMonth::new(year, month)?;
        Ok(())
    }

    pub fn go_to_today(&mut self) -> Result<()> {
        self.go_to_today_at(OffsetDateTime::now_utc())
    }

    pub fn go_to_today_at(&mut self, now: OffsetDateTime) -> Result<()> {
        self.visible = YearMonth::current_at(&self.time_zone, now)?;
        Ok(())
    }

    /// Selects `date` and moves keyboard focus onto it.
    pub fn select(&mut self, date: CivilDate) {
        self.selected = Some(date);
        self.focused = Some(date);
    }

    /// Moves focus one step. Without an existing focus the first press only
    /// places it: on the selection when that is visible, else on the 1st.
    pub fn focus(&mut self, direction: Direction) -> Result<CivilDate> {
        let Some(current) = self.focused else {
            let initial = match self.selected {
                Some(selected) if self.visible.contains(&selected) => selected,
                _ => self.visible.first_day()?,
            };
            self.focused = Some(initial);

            return Ok(initial);
        };

        let step = navigate(current, direction)?;

        if let Some(visible) = step.visible {
            self.visible = visible;
        } else if !self.visible.contains(&step.focused) {
            // Focus was left behind by a month jump; bring the grid to it.
            self.visible = YearMonth::containing(step.focused);
        }

        self.focused = Some(step.focused);

        Ok(step.focused)
    }

    /// Applies one key press. Returns whether the state changed.
    pub fn handle_key(&mut self, key: Key, context: KeyContext) -> Result<bool> {
        if context == KeyContext::TextInput {
            return Ok(false);
        }

        if let Some(direction) = key.direction() {
            self.focus(direction)?;
            return Ok(true);
        }

        match key {
            Key::Enter | Key::Space => match self.focused {
                Some(focused) if self.selected != Some(focused) => {
                    self.selected = Some(focused);
                    Ok(true)
                }
                _ => Ok(false),
            },
            Key::PageUp => self.previous_month().map(|_| true),
            Key::PageDown => self.next_month().map(|_| true),
            Key::Home => {
                let before = self.visible;
                self.go_to_today()?;
                Ok(before != self.visible)
            }
            _ => Ok(false),
        }
    }

    /// Focused date, else the 1st of the visible month.
    pub fn week_anchor(&self) -> Result<CivilDate> {
        match self.focused {
            Some(focused) => Ok(focused),
            None => self.visible.first_day(),
        }
    }

    pub fn month_grid_at(&self, now: OffsetDateTime) -> Result<Vec<CalendarDay>> {
        build_month_grid_at(
            self.visible.year(),
            self.visible.month(),
            &self.time_zone,
            now,
        )
    }

    pub fn week(&self) -> Result<Vec<CivilDate>> {
        build_week(self.week_anchor()?)
    }
}
