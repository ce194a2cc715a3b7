use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Weekday a 7-day week begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn days_from_sunday(&self) -> u8 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

/// Supported display locales.
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub enum Locale {
    #[default]
    #[strum(serialize = "en-AU", ascii_case_insensitive)]
    EnAu,
}

impl Locale {
    /// Australian weeks start on Sunday.
    pub fn week_start(&self) -> WeekStart {
        match self {
            Locale::EnAu => WeekStart::Sunday,
        }
    }
}

/// Week-start convention used by every grid and week build.
pub const WEEK_START: WeekStart = WeekStart::Sunday;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_en_au_is_sunday_first() {
        let locale = Locale::from_str("en-AU").unwrap();
        assert_eq!(locale, Locale::EnAu);
        assert_eq!(locale.week_start(), WeekStart::Sunday);
        assert_eq!(locale.week_start(), WEEK_START);
        assert_eq!(Locale::EnAu.to_string(), "en-AU");
        assert!(Locale::from_str("en-au").is_ok());
        assert!(Locale::from_str("fr-FR").is_err());
    }
}
