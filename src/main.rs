use anyhow::Result;
use clap::{Parser, Subcommand};
use orecal::{AppError, Key, ViewMode};
use orecal_calendar::{CivilDate, YearMonth};

mod cli;

/// orecal - ASX commodities announcement calendar
#[derive(Parser)]
#[command(name = "orecal")]
#[command(about = "Browse mining company announcements on a calendar", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// IANA time zone deciding "today" (overrides config file)
    #[arg(long, global = true)]
    time_zone: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the six-week grid of a month
    Month {
        #[arg(long, requires = "month")]
        year: Option<i32>,

        #[arg(long, requires = "year")]
        month: Option<u8>,

        #[command(flatten)]
        output: cli::OutputArgs,
    },
    /// Show the week containing a date
    Week {
        /// Anchor date (YYYY-MM-DD), defaults to the 1st of the current month
        #[arg(long)]
        date: Option<CivilDate>,

        #[command(flatten)]
        output: cli::OutputArgs,
    },
    /// List events grouped by day
    List {
        #[command(flatten)]
        output: cli::OutputArgs,
    },
    /// Replay keyboard navigation from a date
    Navigate {
        #[arg(long)]
        from: CivilDate,

        /// Comma separated keys, e.g. ArrowRight,ArrowDown,Enter
        #[arg(long, value_delimiter = ',', required = true)]
        keys: Vec<Key>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = orecal::config::Config::load(cli.config.clone())?;
    if let Some(time_zone) = cli.time_zone {
        config.calendar.time_zone = time_zone;
    }
    config.validate().map_err(AppError::ValidationError)?;

    orecal::observability::init_observability(
        "orecal",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Some(Commands::Month {
            year,
            month,
            output,
        }) => {
            let visible = match (year, month) {
                (Some(year), Some(month)) => Some(YearMonth::new(year, month)?),
                _ => None,
            };
            cli::show(&config, ViewMode::Month, visible, None, &output)
        }
        Some(Commands::Week { date, output }) => {
            cli::show(&config, ViewMode::Week, None, date, &output)
        }
        Some(Commands::List { output }) => cli::show(&config, ViewMode::List, None, None, &output),
        Some(Commands::Navigate { from, keys }) => cli::navigate(&config, from, &keys),
        None => cli::show(
            &config,
            config.calendar.default_view,
            None,
            None,
            &cli::OutputArgs::default(),
        ),
    }
}
