mod commands;
mod config;
mod render;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use monthcal_core::{DisabledDays, GridOptions, MonthProps, build_month_grid};

use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "Render and export classified calendar month grids")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a month grid in the terminal
    Show {
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Print the classified grid as JSON
    Export {
        #[command(flatten)]
        grid: GridArgs,
    },
}

#[derive(Args)]
struct GridArgs {
    /// Month to display (1-12, defaults to the current month)
    #[arg(short, long)]
    month: Option<u32>,

    /// Year to display (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Selection range start (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Selection range end (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Earliest selectable date (YYYY-MM-DD)
    #[arg(long)]
    min: Option<String>,

    /// Latest selectable date (YYYY-MM-DD)
    #[arg(long)]
    max: Option<String>,

    /// Disable a date (YYYY-MM-DD, repeatable)
    #[arg(long = "disable", value_name = "DATE")]
    disabled: Vec<String>,

    /// Start weeks on Monday instead of Sunday
    #[arg(long)]
    monday_first: bool,

    /// Treat the range start as a single selected date
    #[arg(long)]
    single: bool,

    /// Render adjacent-month filler as blank space
    #[arg(long)]
    hide_offset_days: bool,

    /// Skip the weekday header row
    #[arg(long)]
    no_weekdays: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GlobalConfig::load()?;

    match cli.command {
        Commands::Show { grid } => {
            let (month, year, options, show_weekdays) = resolve_grid(&grid, &config)?;
            let cells = build_month_grid(month, year, &options)?;
            let props = MonthProps::new(month, year, show_weekdays, &options);
            commands::show::run(&cells, &props)
        }
        Commands::Export { grid } => {
            let (month, year, options, _) = resolve_grid(&grid, &config)?;
            let cells = build_month_grid(month, year, &options)?;
            commands::export::run(&cells)
        }
    }
}

/// Merge CLI flags with config defaults into grid inputs. Flags win.
fn resolve_grid(args: &GridArgs, config: &GlobalConfig) -> Result<(u32, i32, GridOptions, bool)> {
    let today = Local::now().date_naive();
    let month = args.month.unwrap_or_else(|| today.month());
    let year = args.year.unwrap_or_else(|| today.year());

    let options = GridOptions {
        first_day_monday: args.monday_first || config.first_day_monday,
        disable_range: args.single,
        disabled_days: DisabledDays::from_keys(&args.disabled)?,
        disable_offset_days: args.hide_offset_days || config.hide_offset_days,
        start_date: parse_date_arg(args.start.as_deref())?,
        end_date: parse_date_arg(args.end.as_deref())?,
        min_date: parse_date_arg(args.min.as_deref())?,
        max_date: parse_date_arg(args.max.as_deref())?,
    };
    let show_weekdays = !args.no_weekdays && config.show_weekdays;

    Ok((month, year, options, show_weekdays))
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
        })
        .transpose()
}
