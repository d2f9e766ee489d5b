//! Per-day classification records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One cell of a rendered month grid.
///
/// Cells are immutable value objects produced by
/// [`build_month_grid`](crate::build_month_grid) and consumed for a single
/// render pass. Presentation layers branch on the boolean flags only; no
/// date arithmetic is needed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Key unique within one grid: `{month}-{year}-{month:02}-{day:02}`,
    /// using the cell's own 1-based month.
    pub id: String,
    /// The calendar date of this cell.
    pub date: NaiveDate,
    /// Date falls within the requested month (not adjacent filler).
    pub is_month_date: bool,
    /// Date equals the reference "today".
    pub is_today: bool,
    /// Date is within the active selection range, or equals the single
    /// selected date.
    pub is_active: bool,
    /// Date equals the range start. Only set for in-month cells.
    pub is_start_date: bool,
    /// Date equals the range end. Only set for in-month cells.
    pub is_end_date: bool,
    /// Date violates the `min_date`/`max_date` bound.
    pub is_out_of_range: bool,
    /// Cell is interactive: in-month, within selectable bounds, and not
    /// explicitly disabled.
    pub is_visible: bool,
    /// Cell renders as empty space (suppressed adjacent-month filler).
    pub is_hidden: bool,
}

impl DayCell {
    /// Re-render guard: whether two cells produce identical visual output.
    ///
    /// Compares exactly the flags a presentation layer styles by. Cells for
    /// different dates compare equal here when their styling matches; pair
    /// this with a grid-level [`MonthProps`](crate::MonthProps) check.
    pub fn render_equivalent(&self, other: &DayCell) -> bool {
        self.is_active == other.is_active
            && self.is_visible == other.is_visible
            && self.is_start_date == other.is_start_date
            && self.is_end_date == other.is_end_date
    }

    /// Day of the month, for display.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

pub(crate) fn cell_id(date: NaiveDate) -> String {
    format!(
        "{}-{}-{:02}-{:02}",
        date.month(),
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(date: NaiveDate) -> DayCell {
        DayCell {
            id: cell_id(date),
            date,
            is_month_date: true,
            is_today: false,
            is_active: false,
            is_start_date: false,
            is_end_date: false,
            is_out_of_range: false,
            is_visible: true,
            is_hidden: false,
        }
    }

    #[test]
    fn test_cell_id_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(cell_id(date), "3-2024-03-05");
    }

    #[test]
    fn test_render_equivalent_ignores_date_and_today() {
        let a = cell(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let mut b = cell(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        b.is_today = true;
        assert!(a.render_equivalent(&b));

        b.is_active = true;
        assert!(!a.render_equivalent(&b));
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let cell = cell(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let json = serde_json::to_string(&cell).unwrap();
        for field in [
            "id",
            "date",
            "is_month_date",
            "is_today",
            "is_active",
            "is_start_date",
            "is_end_date",
            "is_out_of_range",
            "is_visible",
            "is_hidden",
        ] {
            assert!(json.contains(field), "missing field '{}' in {}", field, json);
        }
    }
}
