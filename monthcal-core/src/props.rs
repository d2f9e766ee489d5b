//! Month-level re-render guard.

use chrono::NaiveDate;

use crate::grid::GridOptions;

/// Every grid input that affects the visual output of a rendered month.
///
/// Presentation layers can skip re-rendering a month whose props satisfy
/// [`same_visual_output`](MonthProps::same_visual_output), independent of
/// any rendering framework's own diffing. Disabled days do not participate:
/// grids differing only in disabled days are not distinguished by this
/// guard, and consumers that disable days dynamically must force a render.
#[derive(Debug, Clone)]
pub struct MonthProps {
    pub month: u32,
    pub year: i32,
    pub first_day_monday: bool,
    pub disable_range: bool,
    pub disable_offset_days: bool,
    pub show_weekdays: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl MonthProps {
    /// Capture the render-relevant inputs of a grid build.
    pub fn new(month: u32, year: i32, show_weekdays: bool, options: &GridOptions) -> Self {
        MonthProps {
            month,
            year,
            first_day_monday: options.first_day_monday,
            disable_range: options.disable_range,
            disable_offset_days: options.disable_offset_days,
            show_weekdays,
            start_date: options.start_date,
            end_date: options.end_date,
            min_date: options.min_date,
            max_date: options.max_date,
        }
    }

    /// Whether two prop sets produce identical visual output.
    pub fn same_visual_output(&self, other: &MonthProps) -> bool {
        self.month == other.month
            && self.year == other.year
            && self.first_day_monday == other.first_day_monday
            && self.disable_range == other.disable_range
            && self.disable_offset_days == other.disable_offset_days
            && self.show_weekdays == other.show_weekdays
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.min_date == other.min_date
            && self.max_date == other.max_date
    }
}
