use orecal::{CalendarState, Key, KeyContext, config::Config};
use orecal_calendar::{CivilDate, YearMonth};

/// Replays key presses from `from` and prints the state after each one.
pub fn navigate(config: &Config, from: CivilDate, keys: &[Key]) -> anyhow::Result<()> {
    let mut state = CalendarState::new(
        YearMonth::containing(from),
        config.calendar.time_zone.clone(),
    )?;
    state.select(from);

    for key in keys {
        let changed = state.handle_key(*key, KeyContext::Calendar)?;
        let focused = state
            .focused()
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_owned());

        tracing::debug!(key = key.as_ref(), changed, "key handled");

        println!(
            "{:<10} focused={focused} visible={}{}",
            key.as_ref(),
            state.visible(),
            if changed { "" } else { " (unchanged)" }
        );
    }

    Ok(())
}
