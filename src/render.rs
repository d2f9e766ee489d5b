//! Terminal rendering for classified month grids.
//!
//! This module branches only on the [`DayCell`] flags to pick styles; all
//! date arithmetic already happened in monthcal-core.

use monthcal_core::{DayCell, MonthProps};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayCell {
    fn render(&self) -> String {
        if self.is_hidden {
            return "  ".to_string();
        }

        let day = format!("{:>2}", self.day());

        if self.is_start_date || self.is_end_date {
            day.white().on_blue().bold().to_string()
        } else if self.is_active {
            day.white().on_blue().to_string()
        } else if !self.is_month_date || self.is_out_of_range {
            day.dimmed().to_string()
        } else if !self.is_visible {
            // In-month, in-range, yet not interactive: explicitly disabled.
            day.strikethrough().to_string()
        } else if self.is_today {
            day.underline().to_string()
        } else {
            day
        }
    }
}

/// Render a full month: title line, optional weekday header, week rows.
pub fn render_month(cells: &[DayCell], props: &MonthProps) -> String {
    let mut lines = Vec::new();

    let title = format!("{} {}", month_name(props.month), props.year);
    lines.push(title.bold().to_string());

    if props.show_weekdays {
        lines.push(weekday_header(props.first_day_monday));
    }

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(|cell| cell.render()).collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

fn weekday_header(first_day_monday: bool) -> String {
    const SUNDAY_FIRST: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
    const MONDAY_FIRST: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

    let labels = if first_day_monday {
        MONDAY_FIRST
    } else {
        SUNDAY_FIRST
    };
    labels
        .iter()
        .map(|label| label.dimmed().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
