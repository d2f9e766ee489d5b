use anyhow::Result;
use monthcal_core::{DayCell, MonthProps};

use crate::render::render_month;

pub fn run(cells: &[DayCell], props: &MonthProps) -> Result<()> {
    println!("{}", render_month(cells, props));
    Ok(())
}
