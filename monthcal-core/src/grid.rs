//! Month grid construction.
//!
//! [`build_month_grid`] turns a month/year plus selection parameters into an
//! ordered sequence of classified [`DayCell`]s covering whole 7-day week
//! rows, including leading/trailing filler days from adjacent months.

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};

use crate::cell::{DayCell, cell_id};
use crate::disabled::DisabledDays;
use crate::error::{MonthCalError, MonthCalResult};

/// Selection and range parameters for a grid build.
///
/// All dates are `NaiveDate` values: time-of-day cannot exist, so the
/// midnight normalization the classification rules assume holds by
/// construction, and caller-owned state is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Week starts on Monday (true) or Sunday (false). Affects only the
    /// leading-offset computation.
    pub first_day_monday: bool,
    /// Only `start_date` defines the active/start/end day, even when
    /// `end_date` is supplied.
    pub disable_range: bool,
    /// Dates forced invisible regardless of range membership.
    pub disabled_days: DisabledDays,
    /// Filler days render as empty space instead of dim context.
    pub disable_offset_days: bool,
    /// Selection range start.
    pub start_date: Option<NaiveDate>,
    /// Selection range end.
    pub end_date: Option<NaiveDate>,
    /// Earliest selectable date.
    pub min_date: Option<NaiveDate>,
    /// Latest selectable date.
    pub max_date: Option<NaiveDate>,
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the range start from a datetime, truncating time-of-day into a
    /// fresh date value.
    pub fn start_datetime(mut self, start: NaiveDateTime) -> Self {
        self.start_date = Some(start.date());
        self
    }

    /// Set the range end from a datetime, truncating time-of-day into a
    /// fresh date value.
    pub fn end_datetime(mut self, end: NaiveDateTime) -> Self {
        self.end_date = Some(end.date());
        self
    }
}

/// Build the classified grid for `month` (1-12) of `year`, using the local
/// system date for the `is_today` flag.
///
/// The grid is emitted in chronological, row-major order and always spans a
/// whole number of 7-day weeks. Each call recomputes from scratch; cells are
/// immutable value objects.
pub fn build_month_grid(
    month: u32,
    year: i32,
    options: &GridOptions,
) -> MonthCalResult<Vec<DayCell>> {
    build_month_grid_with_today(month, year, options, Local::now().date_naive())
}

/// [`build_month_grid`] with a caller-supplied reference date for the
/// `is_today` flag.
pub fn build_month_grid_with_today(
    month: u32,
    year: i32,
    options: &GridOptions,
    today: NaiveDate,
) -> MonthCalResult<Vec<DayCell>> {
    if !(1..=12).contains(&month) {
        return Err(MonthCalError::InvalidMonth(month));
    }
    let out_of_range = || MonthCalError::DateOutOfRange { year, month };

    let first_month_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let last_month_day = first_month_day
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)?;
    let days_in_month = last_month_day.day() as i64;

    let start_week_offset = if options.first_day_monday {
        first_month_day.weekday().num_days_from_monday()
    } else {
        first_month_day.weekday().num_days_from_sunday()
    } as i64;
    let days_to_complete_rows = (start_week_offset + days_in_month) % 7;
    let trailing_offset = if days_to_complete_rows == 0 {
        0
    } else {
        7 - days_to_complete_rows
    };

    let mut cells = Vec::with_capacity((start_week_offset + days_in_month + trailing_offset) as usize);

    for i in -start_week_offset..days_in_month + trailing_offset {
        let date = if i >= 0 {
            first_month_day.checked_add_days(Days::new(i as u64))
        } else {
            first_month_day.checked_sub_days(Days::new(i.unsigned_abs()))
        }
        .ok_or_else(out_of_range)?;

        let is_month_date = (0..days_in_month).contains(&i);

        let is_on_selectable_range = options.min_date.is_none_or(|min| date >= min)
            && options.max_date.is_none_or(|max| date <= max);
        let is_out_of_range = options.min_date.is_some_and(|min| date < min)
            || options.max_date.is_some_and(|max| date > max);

        let mut is_start_date = false;
        let mut is_end_date = false;
        let mut is_active = false;

        match (options.start_date, options.end_date) {
            (Some(start), Some(end)) if !options.disable_range => {
                is_start_date = is_month_date && date == start;
                is_end_date = is_month_date && date == end;
                is_active = if is_month_date {
                    start <= date && date <= end
                } else {
                    filler_day_active(date, start, end, first_month_day, last_month_day)
                };
            }
            // Single selected day: with range logic disabled, or when only
            // a start date was supplied.
            (Some(start), _) if is_month_date && date == start => {
                is_start_date = true;
                is_end_date = true;
                is_active = true;
            }
            _ => {}
        }

        cells.push(DayCell {
            id: cell_id(date),
            date,
            is_month_date,
            is_today: date == today,
            is_active,
            is_start_date,
            is_end_date,
            is_out_of_range,
            is_visible: is_on_selectable_range
                && is_month_date
                && !options.disabled_days.contains(date),
            is_hidden: options.disable_offset_days && !is_month_date,
        });
    }

    Ok(cells)
}

/// Whether a filler day visually continues a range that crosses the month
/// boundary.
///
/// A filler day after the month is active when the range ends past the
/// month's last day and starts on or before it; a filler day before the
/// month is active when the range starts before the month's first day and
/// ends on or after it. Only the month edges are consulted, not the grid
/// window.
fn filler_day_active(
    date: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    first_month_day: NaiveDate,
    last_month_day: NaiveDate,
) -> bool {
    if date > last_month_day {
        return end > last_month_day && start <= last_month_day;
    }
    start < first_month_day && end >= first_month_day
}
